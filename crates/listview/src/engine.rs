//! Engine entry point: filter → sort → paginate in one pass.

use crate::config::ListViewConfig;
use crate::filter::filter;
use crate::paginate::{Pager, paginate};
use crate::query::QueryState;
use crate::record::Listable;
use crate::sort::sort_by_created;

/// The visible page of one table plus its pagination metadata.
///
/// Rows borrow from the caller's snapshot; nothing is retained past the call.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, R> {
    pub rows: Vec<&'a R>,
    /// Number of records that passed the filter (across all pages).
    pub matched: usize,
    pub pager: Pager,
}

impl<R> ListView<'_, R> {
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Evaluate `query` against a snapshot of records.
///
/// Deterministic for identical inputs; safe to call on every keystroke.
pub fn evaluate<'a, R: Listable>(
    records: &'a [R],
    query: &QueryState,
    config: &ListViewConfig,
) -> ListView<'a, R> {
    let filtered = filter(records, &query.search, &query.numeric);
    let ordered = sort_by_created(&filtered, query.sort);
    let window = paginate(&ordered, config.page_size, query.page);

    tracing::debug!(
        records = records.len(),
        matched = ordered.len(),
        page = query.page,
        total_pages = window.total_pages,
        sort = ?query.sort,
        "list view evaluated"
    );

    ListView {
        rows: window.rows,
        matched: ordered.len(),
        pager: Pager::new(query.page, window.total_pages),
    }
}
