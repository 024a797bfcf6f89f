//! The signed-in user, as handed over by the identity provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tenantdesk_core::{DomainError, DomainResult, TenantId, UserId};

/// Current session.
///
/// Call sites receive this as a parameter; nothing in tenantdesk looks it up
/// from process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    /// Organization the user is currently acting within.
    pub active_organization: Option<TenantId>,
    /// Customer id at the payment provider (needed to list orders).
    pub customer_id: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Fails with `Unauthorized` once the session has lapsed.
    pub fn ensure_active(&self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.is_expired(now) {
            return Err(DomainError::Unauthorized);
        }
        Ok(())
    }

    pub fn active_tenant(&self) -> DomainResult<TenantId> {
        self.active_organization
            .ok_or_else(|| DomainError::validation("no active organization"))
    }

    /// Avatar fallback: first letter of each word of the display name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
