//! Fixtures shared by the unit tests in this crate.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tenantdesk_core::Entity;

use crate::record::Listable;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub invoice_number: String,
    pub customer: Option<String>,
    pub total_amount: f64,
}

impl Entity for Invoice {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Listable for Invoice {
    const SEARCH_FIELDS: &'static [&'static str] = &["invoice_number", "customer"];
    const NUMERIC_FIELDS: &'static [&'static str] = &["total_amount"];

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_text(&self, field: &str) -> Option<&str> {
        match field {
            "invoice_number" => Some(&self.invoice_number),
            "customer" => self.customer.as_deref(),
            _ => None,
        }
    }

    fn numeric_value(&self, field: &str) -> Option<f64> {
        match field {
            "total_amount" => Some(self.total_amount),
            _ => None,
        }
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap()
}

/// `n` invoices created one day apart, oldest first (`INV-001` at [`epoch`]).
pub fn invoices(n: usize) -> Vec<Invoice> {
    (0..n)
        .map(|i| Invoice {
            id: format!("inv_{i}"),
            created_at: epoch() + Duration::days(i as i64),
            invoice_number: format!("INV-{:03}", i + 1),
            customer: if i % 2 == 0 { Some("Acme Corp".into()) } else { None },
            total_amount: 10.0 * (i + 1) as f64,
        })
        .collect()
}

pub fn ids(rows: &[&Invoice]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}
