//! Expiry status for time-bounded records (API keys).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default look-ahead before an expiry counts as "soon".
pub const DEFAULT_WARNING_WINDOW_DAYS: u32 = 7;

/// Coarse classification used for visual emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Ok,
    ExpiresSoon,
    Expired,
}

impl ExpiryStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExpiryStatus::Ok => "OK",
            ExpiryStatus::ExpiresSoon => "Expires soon",
            ExpiryStatus::Expired => "Expired",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ExpiryStatus::Ok => Severity::Normal,
            ExpiryStatus::ExpiresSoon => Severity::Warning,
            ExpiryStatus::Expired => Severity::Critical,
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// How far ahead an expiry is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    warning_window: Duration,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::from_days(DEFAULT_WARNING_WINDOW_DAYS)
    }
}

impl ExpiryPolicy {
    pub fn new(warning_window: Duration) -> Self {
        Self { warning_window }
    }

    pub fn from_days(days: u32) -> Self {
        Self::new(Duration::days(i64::from(days)))
    }

    pub fn warning_window(&self) -> Duration {
        self.warning_window
    }

    /// Pure function of two instants; `now` is always injected.
    ///
    /// - no expiry → `Ok`
    /// - `now > expiry` → `Expired`
    /// - `expiry <= now + window` → `ExpiresSoon` (inclusive)
    /// - otherwise → `Ok`
    pub fn derive(&self, expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ExpiryStatus {
        let Some(expiry) = expiry else {
            return ExpiryStatus::Ok;
        };

        if now > expiry {
            return ExpiryStatus::Expired;
        }

        match now.checked_add_signed(self.warning_window) {
            Some(horizon) if expiry > horizon => ExpiryStatus::Ok,
            // An unrepresentable horizon lies past every expiry.
            _ => ExpiryStatus::ExpiresSoon,
        }
    }
}

/// [`ExpiryPolicy::derive`] with the default 7-day window.
pub fn derive_status(expiry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ExpiryStatus {
    ExpiryPolicy::default().derive(expiry, now)
}
