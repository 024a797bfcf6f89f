//! Infrastructure layer: record sources, read-model storage, and the table
//! controllers that drive the list-view engine for each call site.

pub mod key_provider;
pub mod read_model;
pub mod source;
pub mod table;
pub mod tables;

pub use key_provider::{
    ApiKeyError, ApiKeyProvider, ApiKeyStore, CreatedApiKey, InMemoryApiKeyProvider, Mutation,
};
pub use read_model::{InMemoryTenantStore, Partition, StoreError, TenantStore};
pub use source::{FetchError, FnSource, RecordSource, StaticSource, parse_json};
pub use table::{LoadState, TableCommand, TableController};
pub use tables::{ApiKeyRow, ApiKeysSource, ApiKeysTable, OrdersTable, ProviderOrdersSource, UsageTable};
