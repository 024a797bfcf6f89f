//! List-view configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::ListViewError;
use crate::status::{DEFAULT_WARNING_WINDOW_DAYS, ExpiryPolicy};

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

pub const PAGE_SIZE_ENV: &str = "TENANTDESK_PAGE_SIZE";
pub const EXPIRY_WARNING_DAYS_ENV: &str = "TENANTDESK_EXPIRY_WARNING_DAYS";

/// Engine parameters shared by every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListViewConfig {
    /// Rows per page.
    pub page_size: NonZeroUsize,
    /// Days ahead of expiry at which a key is flagged "Expires soon".
    pub expiry_warning_days: u32,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            expiry_warning_days: DEFAULT_WARNING_WINDOW_DAYS,
        }
    }
}

impl ListViewConfig {
    /// Defaults overridden by `TENANTDESK_PAGE_SIZE` / `TENANTDESK_EXPIRY_WARNING_DAYS`.
    pub fn from_env() -> Result<Self, ListViewError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ListViewError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            config.page_size = raw.trim().parse().map_err(|_| {
                ListViewError::InvalidConfig(format!(
                    "{PAGE_SIZE_ENV} must be a positive integer, got {raw:?}"
                ))
            })?;
        }

        if let Some(raw) = lookup(EXPIRY_WARNING_DAYS_ENV) {
            config.expiry_warning_days = raw.trim().parse().map_err(|_| {
                ListViewError::InvalidConfig(format!(
                    "{EXPIRY_WARNING_DAYS_ENV} must be a non-negative integer, got {raw:?}"
                ))
            })?;
        }

        Ok(config)
    }

    pub fn expiry_policy(&self) -> ExpiryPolicy {
        ExpiryPolicy::from_days(self.expiry_warning_days)
    }
}
