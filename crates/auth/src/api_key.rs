//! API-key records as listed by the identity provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tenantdesk_core::Entity;
use tenantdesk_listview::{ExpiryPolicy, ExpiryStatus, Listable};

// ─────────────────────────────────────────────────────────────────────────────
// Record
// ─────────────────────────────────────────────────────────────────────────────

/// Free-form metadata attached at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyMetadata {
    #[serde(default)]
    pub key_description: Option<String>,
}

/// One API key. The secret itself is never part of a listed record; `start`
/// holds the first characters for recognition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<ApiKeyMetadata>,
}

fn enabled_by_default() -> bool {
    true
}

impl ApiKey {
    pub fn description(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.key_description.as_deref())
    }

    /// Expiry status at `now` (injected, never read from the clock here).
    pub fn status(&self, now: DateTime<Utc>, policy: &ExpiryPolicy) -> ExpiryStatus {
        policy.derive(self.expires_at, now)
    }

    /// "Expires at" column: RFC 3339 instant or "Never".
    pub fn expires_label(&self) -> String {
        self.expires_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "Never".to_string())
    }
}

impl Entity for ApiKey {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ApiKey {
    pub const NAME: &'static str = "name";
}

impl Listable for ApiKey {
    const SEARCH_FIELDS: &'static [&'static str] = &[ApiKey::NAME];

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_text(&self, field: &str) -> Option<&str> {
        match field {
            ApiKey::NAME => self.name.as_deref(),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Listing response
// ─────────────────────────────────────────────────────────────────────────────

/// Body of the key-listing endpoint: `{ "data": [...] }`, where `data` may be
/// missing or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiKeysResponse {
    #[serde(default)]
    pub data: Option<Vec<ApiKey>>,
}

impl ApiKeysResponse {
    pub fn into_keys(self) -> Vec<ApiKey> {
        self.data.unwrap_or_default()
    }
}
