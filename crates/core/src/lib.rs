//! `tenantdesk-core` — shared building blocks for every tenantdesk crate.
//!
//! This crate contains **pure** primitives (no IO, no provider clients).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{TenantId, UserId};
