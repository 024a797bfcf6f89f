//! `tenantdesk-auth` — identity-side records shown by the dashboard.
//!
//! Sessions, password hashing and key issuance are owned by the identity
//! provider. This crate only models what the UI reads back: the signed-in
//! user (passed explicitly, never read ambiently) and API-key records.

pub mod api_key;
pub mod create;
pub mod session;

pub use api_key::{ApiKey, ApiKeyMetadata, ApiKeysResponse};
pub use create::{CreateApiKeyRequest, DEFAULT_KEY_PREFIX, ExpirationOption};
pub use session::Session;
