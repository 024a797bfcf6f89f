use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tenantdesk_core::Entity;
use tenantdesk_listview::{Listable, Severity};

/// Product embedded in a provider order (only what the table needs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Order as returned by the payment provider's order listing.
///
/// Amounts are in the smallest currency unit (e.g. cents). Fields the
/// dashboard never reads are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOrder {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: String,
    pub paid: bool,
    #[serde(default)]
    pub subtotal_amount: i64,
    pub net_amount: i64,
    pub tax_amount: i64,
    pub total_amount: i64,
    pub currency: String,
    #[serde(default)]
    pub billing_reason: String,
    pub invoice_number: String,
    #[serde(default)]
    pub is_invoice_generated: bool,
    #[serde(default)]
    pub customer_id: String,
    pub product: ProviderProduct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPagination {
    pub total_count: u64,
    pub max_page: u64,
}

/// One page of the provider's order listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub items: Vec<ProviderOrder>,
    #[serde(default)]
    pub pagination: ProviderPagination,
}

impl OrdersResponse {
    pub fn into_rows(self) -> Vec<OrderRow> {
        self.items.into_iter().map(OrderRow::from).collect()
    }
}

/// Flattened order row for the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub paid: bool,
    pub net_amount: i64,
    pub tax_amount: i64,
    pub total_amount: i64,
    pub currency: String,
    pub invoice_number: String,
    pub product_name: String,
}

impl From<ProviderOrder> for OrderRow {
    fn from(order: ProviderOrder) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            paid: order.paid,
            net_amount: order.net_amount,
            tax_amount: order.tax_amount,
            total_amount: order.total_amount,
            currency: order.currency,
            invoice_number: order.invoice_number,
            product_name: order.product.name,
        }
    }
}

impl OrderRow {
    pub const INVOICE_NUMBER: &'static str = "invoice_number";
    pub const TOTAL_AMOUNT: &'static str = "total_amount";

    /// "Paid" column.
    pub fn paid_label(&self) -> &'static str {
        if self.paid { "Yes" } else { "No" }
    }

    pub fn paid_severity(&self) -> Severity {
        if self.paid {
            Severity::Normal
        } else {
            Severity::Warning
        }
    }

    pub fn currency_label(&self) -> String {
        self.currency.to_uppercase()
    }
}

impl Entity for OrderRow {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Listable for OrderRow {
    const SEARCH_FIELDS: &'static [&'static str] = &[OrderRow::INVOICE_NUMBER];
    const NUMERIC_FIELDS: &'static [&'static str] = &[OrderRow::TOTAL_AMOUNT];

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_text(&self, field: &str) -> Option<&str> {
        match field {
            OrderRow::INVOICE_NUMBER => Some(&self.invoice_number),
            _ => None,
        }
    }

    // Compared as stored (minor units); a typed "19.99" does not match 1999.
    fn numeric_value(&self, field: &str) -> Option<f64> {
        match field {
            OrderRow::TOTAL_AMOUNT => Some(self.total_amount as f64),
            _ => None,
        }
    }
}
