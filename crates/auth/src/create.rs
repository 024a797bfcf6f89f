//! API-key creation request, as submitted by the "create key" dialog.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use tenantdesk_core::{DomainError, DomainResult};

pub const DEFAULT_KEY_PREFIX: &str = "PROJECT_";

const DAY_SECS: u64 = 60 * 60 * 24;

/// Expiration choices offered by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationOption {
    #[default]
    OneMonth,
    OneYear,
    /// The provider has no true "never"; twenty years stands in for it.
    Never,
}

impl ExpirationOption {
    pub const ALL: [ExpirationOption; 3] = [
        ExpirationOption::OneMonth,
        ExpirationOption::OneYear,
        ExpirationOption::Never,
    ];

    pub fn seconds(self) -> u64 {
        match self {
            ExpirationOption::OneMonth => 30 * DAY_SECS,
            ExpirationOption::OneYear => 365 * DAY_SECS,
            ExpirationOption::Never => 7300 * DAY_SECS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpirationOption::OneMonth => "1 month (default)",
            ExpirationOption::OneYear => "1 year",
            ExpirationOption::Never => "Never",
        }
    }

    pub fn from_seconds(seconds: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.seconds() == seconds)
    }
}

/// Body of the key-creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    pub name: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    pub prefix: String,
    pub description: String,
}

impl CreateApiKeyRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expires_in: ExpirationOption::default().seconds(),
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            description: description.into(),
        }
    }

    pub fn with_expiration(mut self, option: ExpirationOption) -> Self {
        self.expires_in = option.seconds();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// A blank prefix falls back to [`DEFAULT_KEY_PREFIX`].
    pub fn normalized(mut self) -> Self {
        if self.prefix.trim().is_empty() {
            self.prefix = DEFAULT_KEY_PREFIX.to_string();
        }
        self
    }

    /// Every field is required; blank strings and a zero lifetime count as missing.
    pub fn validate(&self) -> DomainResult<()> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.name) || self.expires_in == 0 || blank(&self.prefix) || blank(&self.description)
        {
            return Err(DomainError::validation("missing required fields"));
        }
        Ok(())
    }

    /// Absolute expiry for a key created at `now`.
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in).ok()?;
        now.checked_add_signed(Duration::try_seconds(secs)?)
    }
}
