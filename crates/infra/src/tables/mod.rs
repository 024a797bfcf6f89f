//! The three call sites of the list-view engine.

pub mod api_keys;
pub mod orders;
pub mod usage;

#[cfg(test)]
pub(crate) mod testing;

pub use api_keys::{ApiKeyRow, ApiKeysSource, ApiKeysTable};
pub use orders::{OrdersTable, ProviderOrdersSource};
pub use usage::UsageTable;
