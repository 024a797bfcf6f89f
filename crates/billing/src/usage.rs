use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tenantdesk_core::Entity;
use tenantdesk_listview::Listable;

/// One metered usage event (a generation job, a parse, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Cost in credits.
    pub amount_coins: i64,
    /// Cost in `currency`.
    pub amount_currency: f64,
    pub currency: String,
    pub usage_type: String,
    pub usage_name: String,
}

impl UsageEvent {
    pub const USAGE_TYPE: &'static str = "usage_type";
    pub const USAGE_NAME: &'static str = "usage_name";
}

impl Entity for UsageEvent {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Listable for UsageEvent {
    const SEARCH_FIELDS: &'static [&'static str] = &[UsageEvent::USAGE_TYPE, UsageEvent::USAGE_NAME];

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_text(&self, field: &str) -> Option<&str> {
        match field {
            UsageEvent::USAGE_TYPE => Some(&self.usage_type),
            UsageEvent::USAGE_NAME => Some(&self.usage_name),
            _ => None,
        }
    }
}
