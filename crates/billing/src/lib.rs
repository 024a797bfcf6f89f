//! Billing rows shown on the dashboard (read-only).
//!
//! Checkout, subscriptions and webhooks belong to the payment provider. This
//! crate maps the provider's order payloads into flat table rows and models
//! usage events.

pub mod order;
pub mod usage;

pub use order::{OrderRow, OrdersResponse, ProviderOrder, ProviderPagination, ProviderProduct};
pub use usage::UsageEvent;
