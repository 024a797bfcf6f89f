//! `tenantdesk-listview` — the client-side list-view engine.
//!
//! One generic engine shared by every table (API keys, orders, usage):
//! filter → sort → paginate, plus expiry status derivation for time-bounded
//! records. Every stage is a pure function of (snapshot, [`QueryState`]); the
//! engine owns no records and keeps no state between calls.

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod query;
pub mod record;
pub mod sort;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ListViewConfig;
pub use engine::{ListView, evaluate};
pub use error::ListViewError;
pub use filter::filter;
pub use paginate::{PageWindow, Pager, paginate, total_pages};
pub use query::{NumericTerm, QueryState, SortDirection};
pub use record::Listable;
pub use sort::sort_by_created;
pub use status::{ExpiryPolicy, ExpiryStatus, Severity, derive_status};
