//! Orders table: invoice-number search, exact total filter, date sort.

use tenantdesk_auth::Session;
use tenantdesk_billing::{OrderRow, OrdersResponse};

use crate::source::{FetchError, RecordSource, into_fetch_error};
use crate::table::TableController;

pub type OrdersTable<S> = TableController<OrderRow, S>;

/// Source over the payment provider's order listing for the session's
/// customer.
pub struct ProviderOrdersSource<F> {
    fetch: F,
}

impl<F> ProviderOrdersSource<F>
where
    F: Fn(&str) -> anyhow::Result<OrdersResponse>,
{
    /// `fetch` receives the provider customer id.
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

impl<F> RecordSource<OrderRow> for ProviderOrdersSource<F>
where
    F: Fn(&str) -> anyhow::Result<OrdersResponse>,
{
    fn fetch(&self, session: &Session) -> Result<Vec<OrderRow>, FetchError> {
        let customer_id = session
            .customer_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(FetchError::MissingCustomer)?;

        let response = (self.fetch)(customer_id).map_err(into_fetch_error)?;
        tracing::debug!(
            customer_id,
            items = response.items.len(),
            total_count = response.pagination.total_count,
            "provider orders fetched"
        );
        Ok(response.into_rows())
    }
}
