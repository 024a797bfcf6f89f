//! Fixtures shared by the infra unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use tenantdesk_auth::{ApiKey, Session};
use tenantdesk_billing::{OrdersResponse, ProviderOrder, ProviderPagination, ProviderProduct, UsageEvent};
use tenantdesk_core::UserId;

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap()
}

/// Signed-in user with no organization and no provider customer.
pub fn session() -> Session {
    Session {
        user_id: UserId::new(),
        email: "ada@example.com".into(),
        name: "Ada Lovelace".into(),
        active_organization: None,
        customer_id: None,
        expires_at: epoch() + Duration::days(3650),
    }
}

/// `n` usage events one day apart, ids "0".."n-1".
pub fn usage_events(n: usize) -> Vec<UsageEvent> {
    (0..n)
        .map(|i| UsageEvent {
            id: i.to_string(),
            created_at: epoch() + Duration::days(i as i64),
            amount_coins: 10 * (i as i64 + 1),
            amount_currency: 0.1 * (i as f64 + 1.0),
            currency: "eur".into(),
            usage_type: "ai".into(),
            usage_name: format!("job-{i}"),
        })
        .collect()
}

pub fn sample_usage() -> Vec<UsageEvent> {
    let event = |id: &str, day: i64, usage_type: &str, usage_name: &str| UsageEvent {
        id: id.into(),
        created_at: epoch() + Duration::days(day),
        amount_coins: 5,
        amount_currency: 0.05,
        currency: "eur".into(),
        usage_type: usage_type.into(),
        usage_name: usage_name.into(),
    };
    vec![
        event("1", 0, "ai", "generate-summary"),
        event("2", 1, "pdf", "Generate-Invoice"),
        event("3", 2, "pdf", "export"),
    ]
}

pub fn api_key(id: &str, name: &str, day: i64, expires_at: Option<DateTime<Utc>>) -> ApiKey {
    ApiKey {
        id: id.into(),
        name: Some(name.into()),
        prefix: Some("PROJECT_".into()),
        start: Some("PROJECT_a1b".into()),
        enabled: true,
        created_at: epoch() + Duration::days(day),
        expires_at,
        metadata: None,
    }
}

/// `n` paid/unpaid orders one day apart with totals 1000, 2000, ... cents.
pub fn orders_response(n: usize) -> OrdersResponse {
    let items = (0..n)
        .map(|i| ProviderOrder {
            id: format!("ord_{i}"),
            created_at: epoch() + Duration::days(i as i64),
            status: "paid".into(),
            paid: i % 2 == 0,
            subtotal_amount: 1000 * (i as i64 + 1),
            net_amount: 1000 * (i as i64 + 1),
            tax_amount: 0,
            total_amount: 1000 * (i as i64 + 1),
            currency: "eur".into(),
            billing_reason: "purchase".into(),
            invoice_number: format!("INV-{:03}", i + 1),
            is_invoice_generated: true,
            customer_id: "cus_1".into(),
            product: ProviderProduct {
                id: "prod_1".into(),
                name: "Credits".into(),
                is_recurring: false,
            },
        })
        .collect();
    OrdersResponse {
        items,
        pagination: ProviderPagination {
            total_count: n as u64,
            max_page: 1,
        },
    }
}
