//! Key creation and deletion. Every successful mutation hands back the
//! command the caller dispatches to the keys table so it refetches.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use tenantdesk_auth::{ApiKey, ApiKeyMetadata, CreateApiKeyRequest, Session};
use tenantdesk_core::{DomainError, UserId};

use crate::read_model::{InMemoryTenantStore, StoreError, TenantStore};
use crate::table::TableCommand;

/// Characters of the secret kept on the listed record.
const START_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("api key not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a mutation plus the follow-up for the table that lists it.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub value: T,
    pub then: TableCommand,
}

impl<T> Mutation<T> {
    fn invalidating(value: T) -> Self {
        Self {
            value,
            then: TableCommand::Invalidate,
        }
    }
}

/// A freshly created key. `secret` is shown once and never listed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedApiKey {
    pub key: ApiKey,
    pub secret: String,
}

/// Keys belong to the signed-in user, not to an organization. Both mutations
/// require a session that is still valid at `now`.
pub trait ApiKeyProvider {
    fn create(
        &self,
        session: &Session,
        request: CreateApiKeyRequest,
        now: DateTime<Utc>,
    ) -> Result<Mutation<CreatedApiKey>, ApiKeyError>;

    fn delete(
        &self,
        session: &Session,
        key_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Mutation<ApiKey>, ApiKeyError>;
}

pub type ApiKeyStore = InMemoryTenantStore<String, ApiKey, UserId>;

/// Provider over an in-memory store partitioned by user. The same store
/// doubles as the record source for the keys table.
#[derive(Debug, Default)]
pub struct InMemoryApiKeyProvider {
    store: Arc<ApiKeyStore>,
}

impl InMemoryApiKeyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> Arc<ApiKeyStore> {
        Arc::clone(&self.store)
    }
}

impl ApiKeyProvider for InMemoryApiKeyProvider {
    fn create(
        &self,
        session: &Session,
        request: CreateApiKeyRequest,
        now: DateTime<Utc>,
    ) -> Result<Mutation<CreatedApiKey>, ApiKeyError> {
        session.ensure_active(now)?;

        let request = request.normalized();
        request.validate()?;

        let secret = format!("{}{}", request.prefix, Uuid::new_v4().simple());
        let key = ApiKey {
            id: Uuid::now_v7().to_string(),
            name: Some(request.name.trim().to_string()),
            prefix: Some(request.prefix.clone()),
            start: Some(secret.chars().take(request.prefix.chars().count() + START_LEN).collect()),
            enabled: true,
            created_at: now,
            expires_at: request.expires_at(now),
            metadata: Some(ApiKeyMetadata {
                key_description: Some(request.description.clone()),
            }),
        };

        self.store.upsert(session.user_id, key.id.clone(), key.clone())?;
        tracing::info!(
            user_id = %session.user_id,
            key_id = %key.id,
            expires_in = request.expires_in,
            "api key created"
        );

        Ok(Mutation::invalidating(CreatedApiKey { key, secret }))
    }

    fn delete(
        &self,
        session: &Session,
        key_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Mutation<ApiKey>, ApiKeyError> {
        session.ensure_active(now)?;

        let key_id = key_id.trim();
        if key_id.is_empty() {
            return Err(DomainError::validation("key id is required").into());
        }

        let removed = self
            .store
            .remove(session.user_id, &key_id.to_string())?
            .ok_or_else(|| ApiKeyError::NotFound(key_id.to_string()))?;

        tracing::info!(user_id = %session.user_id, key_id, "api key deleted");
        Ok(Mutation::invalidating(removed))
    }
}
