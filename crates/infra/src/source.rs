//! Where table snapshots come from.
//!
//! Network calls, provider SDKs and their failure modes live behind
//! [`RecordSource`]. The engine only ever sees the resulting `Vec`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use tenantdesk_auth::Session;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("no session found")]
    Unauthenticated,

    #[error("no active organization")]
    NoActiveOrganization,

    #[error("missing customer id")]
    MissingCustomer,

    #[error("provider error: {0}")]
    Provider(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Fetch a full snapshot of records for the signed-in user.
pub trait RecordSource<R> {
    fn fetch(&self, session: &Session) -> Result<Vec<R>, FetchError>;
}

impl<R, S> RecordSource<R> for Arc<S>
where
    S: RecordSource<R> + ?Sized,
{
    fn fetch(&self, session: &Session) -> Result<Vec<R>, FetchError> {
        (**self).fetch(session)
    }
}

/// Source backed by a closure (typically wrapping an HTTP client call).
///
/// A `FetchError` returned through `anyhow` is preserved; anything else is
/// reported as a provider error.
pub struct FnSource<F>(F);

impl<F> FnSource<F> {
    pub fn new(fetch: F) -> Self {
        Self(fetch)
    }
}

impl<R, F> RecordSource<R> for FnSource<F>
where
    F: Fn(&Session) -> anyhow::Result<Vec<R>>,
{
    fn fetch(&self, session: &Session) -> Result<Vec<R>, FetchError> {
        (self.0)(session).map_err(into_fetch_error)
    }
}

pub(crate) fn into_fetch_error(err: anyhow::Error) -> FetchError {
    match err.downcast::<FetchError>() {
        Ok(fetch) => fetch,
        Err(other) => FetchError::Provider(format!("{other:#}")),
    }
}

/// Fixed collection (demo data, tests). Every fetch returns a fresh copy.
#[derive(Debug, Clone, Default)]
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Clone> RecordSource<R> for StaticSource<R> {
    fn fetch(&self, _session: &Session) -> Result<Vec<R>, FetchError> {
        Ok(self.records.clone())
    }
}

/// Decode a response body, mapping decode failures to [`FetchError::Malformed`].
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::testing::session;

    #[test]
    fn fn_source_preserves_typed_errors() {
        let source = FnSource::new(|_: &Session| -> anyhow::Result<Vec<u32>> {
            Err(FetchError::MissingCustomer.into())
        });
        assert_eq!(source.fetch(&session()), Err(FetchError::MissingCustomer));
    }

    #[test]
    fn fn_source_wraps_foreign_errors() {
        let source = FnSource::new(|_: &Session| -> anyhow::Result<Vec<u32>> {
            Err(anyhow::anyhow!("connection reset").context("GET /api/auth/keys"))
        });
        assert_eq!(
            source.fetch(&session()),
            Err(FetchError::Provider("GET /api/auth/keys: connection reset".into()))
        );
    }

    #[test]
    fn static_source_returns_copies() {
        let source = StaticSource::new(vec![1, 2, 3]);
        assert_eq!(source.fetch(&session()).unwrap(), vec![1, 2, 3]);
        assert_eq!(Arc::new(source).fetch(&session()).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn parse_json_reports_malformed_bodies() {
        let err = parse_json::<Vec<u32>>("{not json").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
        assert_eq!(parse_json::<Vec<u32>>("[1]").unwrap(), vec![1]);
    }
}
