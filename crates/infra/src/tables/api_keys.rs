//! API-keys table: name search, date sort, expiry status per row.

use chrono::{DateTime, Utc};

use tenantdesk_auth::{ApiKey, ApiKeysResponse, Session};
use tenantdesk_listview::{ExpiryStatus, ListView};

use crate::source::{FetchError, RecordSource, into_fetch_error};
use crate::table::TableController;

pub type ApiKeysTable<S> = TableController<ApiKey, S>;

/// Source over the key-listing endpoint (`{ "data": [...] }`).
pub struct ApiKeysSource<F> {
    fetch: F,
}

impl<F> ApiKeysSource<F>
where
    F: Fn(&Session) -> anyhow::Result<ApiKeysResponse>,
{
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

impl<F> RecordSource<ApiKey> for ApiKeysSource<F>
where
    F: Fn(&Session) -> anyhow::Result<ApiKeysResponse>,
{
    fn fetch(&self, session: &Session) -> Result<Vec<ApiKey>, FetchError> {
        (self.fetch)(session)
            .map(ApiKeysResponse::into_keys)
            .map_err(into_fetch_error)
    }
}

/// A visible key with its derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyRow<'a> {
    pub key: &'a ApiKey,
    pub status: ExpiryStatus,
}

impl<S> TableController<ApiKey, S>
where
    S: RecordSource<ApiKey>,
{
    /// Current page with each row's status evaluated at `now`.
    pub fn rows_at(&self, now: DateTime<Utc>) -> (Vec<ApiKeyRow<'_>>, ListView<'_, ApiKey>) {
        let view = self.view();
        let policy = self.config().expiry_policy();
        let rows = view
            .rows
            .iter()
            .map(|&key| ApiKeyRow {
                key,
                status: key.status(now, &policy),
            })
            .collect();
        (rows, view)
    }
}
