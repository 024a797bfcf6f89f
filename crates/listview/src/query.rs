//! Query state: everything the user controls about one rendering of a table.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ListViewError;
use crate::paginate::Pager;
use crate::record::Listable;

/// Sort direction on the creation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first.
    Ascending,
    /// Most recent first.
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison. Equal stays equal, so stable sorts keep
    /// tied records in input order in both directions.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Arrow shown on the "Sort by Date" toggle.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Exact-equality term typed into a numeric search box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NumericTerm {
    /// No filtering on this field.
    #[default]
    Unset,
    /// Keep records whose value equals this number exactly.
    Equals(f64),
    /// Input that is not a number. Matches nothing; the raw text is kept so the
    /// search box can echo it back.
    Unparseable(String),
}

impl NumericTerm {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return NumericTerm::Unset;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => NumericTerm::Equals(value),
            _ => NumericTerm::Unparseable(input.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, NumericTerm::Unset)
    }

    // Exact float comparison: a stored 19.990000001 never matches a typed 19.99.
    pub fn matches(&self, value: Option<f64>) -> bool {
        match self {
            NumericTerm::Unset => true,
            NumericTerm::Equals(target) => value == Some(*target),
            NumericTerm::Unparseable(_) => false,
        }
    }
}

/// User-controlled parameters for one table.
///
/// Mutated only by caller actions; the engine reads it and never writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    /// Free-text terms by field. Empty terms are not stored.
    pub search: BTreeMap<String, String>,
    /// Numeric-equality terms by field. `Unset` terms are not stored.
    pub numeric: BTreeMap<String, NumericTerm>,
    pub sort: SortDirection,
    /// 1-based page number.
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: BTreeMap::new(),
            numeric: BTreeMap::new(),
            sort: SortDirection::Descending,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, field: impl Into<String>, term: impl Into<String>) -> Self {
        store_search(&mut self.search, field.into(), term.into());
        self
    }

    pub fn with_numeric(mut self, field: impl Into<String>, input: &str) -> Self {
        store_numeric(&mut self.numeric, field.into(), NumericTerm::parse(input));
        self
    }

    pub fn with_sort(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Current text of the search box for `field` (empty when unset).
    pub fn search_term(&self, field: &str) -> &str {
        self.search.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn numeric_term(&self, field: &str) -> &NumericTerm {
        static UNSET: NumericTerm = NumericTerm::Unset;
        self.numeric.get(field).unwrap_or(&UNSET)
    }

    /// True when no search or numeric term is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.numeric.is_empty()
    }

    /// Typing into the search box for `field`.
    pub fn set_search<R: Listable>(
        &mut self,
        field: &str,
        term: impl Into<String>,
    ) -> Result<(), ListViewError> {
        if !R::SEARCH_FIELDS.contains(&field) {
            return Err(ListViewError::UnknownSearchField(field.to_string()));
        }
        store_search(&mut self.search, field.to_string(), term.into());
        Ok(())
    }

    /// Typing into the numeric search box for `field`.
    pub fn set_numeric<R: Listable>(&mut self, field: &str, input: &str) -> Result<(), ListViewError> {
        if !R::NUMERIC_FIELDS.contains(&field) {
            return Err(ListViewError::UnknownNumericField(field.to_string()));
        }
        store_numeric(&mut self.numeric, field.to_string(), NumericTerm::parse(input));
        Ok(())
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    /// "next" control. No-op (returns `false`) when the control is disabled.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        match Pager::new(self.page, total_pages).next() {
            Some(page) => {
                self.page = page;
                true
            }
            None => false,
        }
    }

    /// "previous" control. No-op (returns `false`) when the control is disabled.
    pub fn previous_page(&mut self) -> bool {
        // Previous never depends on the page count.
        match Pager::new(self.page, 0).previous() {
            Some(page) => {
                self.page = page;
                true
            }
            None => false,
        }
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }
}

fn store_search(search: &mut BTreeMap<String, String>, field: String, term: String) {
    if term.is_empty() {
        search.remove(&field);
    } else {
        search.insert(field, term);
    }
}

fn store_numeric(numeric: &mut BTreeMap<String, NumericTerm>, field: String, term: NumericTerm) {
    if term.is_active() {
        numeric.insert(field, term);
    } else {
        numeric.remove(&field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Invoice;

    #[test]
    fn default_state_is_descending_first_page() {
        let q = QueryState::default();
        assert_eq!(q.sort, SortDirection::Descending);
        assert_eq!(q.page, 1);
        assert!(q.is_unfiltered());
    }

    #[test]
    fn numeric_term_parsing() {
        assert_eq!(NumericTerm::parse(""), NumericTerm::Unset);
        assert_eq!(NumericTerm::parse("   "), NumericTerm::Unset);
        assert_eq!(NumericTerm::parse("42"), NumericTerm::Equals(42.0));
        assert_eq!(NumericTerm::parse(" 19.5 "), NumericTerm::Equals(19.5));
        assert_eq!(
            NumericTerm::parse("12abc"),
            NumericTerm::Unparseable("12abc".to_string())
        );
        assert_eq!(NumericTerm::parse("NaN"), NumericTerm::Unparseable("NaN".to_string()));
    }

    #[test]
    fn unparseable_term_matches_nothing() {
        let term = NumericTerm::parse("ten");
        assert!(term.is_active());
        assert!(!term.matches(Some(10.0)));
        assert!(!term.matches(None));
    }

    #[test]
    fn set_search_rejects_undeclared_field() {
        let mut q = QueryState::new();
        let err = q.set_search::<Invoice>("status", "paid").unwrap_err();
        assert_eq!(err, ListViewError::UnknownSearchField("status".into()));

        let err = q.set_numeric::<Invoice>("invoice_number", "3").unwrap_err();
        assert_eq!(err, ListViewError::UnknownNumericField("invoice_number".into()));
    }

    #[test]
    fn clearing_a_term_removes_it() {
        let mut q = QueryState::new();
        q.set_search::<Invoice>("invoice_number", "INV").unwrap();
        q.set_numeric::<Invoice>("total_amount", "10").unwrap();
        assert_eq!(q.search_term("invoice_number"), "INV");
        assert!(!q.is_unfiltered());

        q.set_search::<Invoice>("invoice_number", "").unwrap();
        q.set_numeric::<Invoice>("total_amount", " ").unwrap();
        assert_eq!(q.search_term("invoice_number"), "");
        assert_eq!(q.numeric_term("total_amount"), &NumericTerm::Unset);
        assert!(q.is_unfiltered());
    }

    #[test]
    fn changing_a_filter_keeps_the_page() {
        let mut q = QueryState::new().with_page(3);
        q.set_search::<Invoice>("customer", "acme").unwrap();
        assert_eq!(q.page, 3);
    }

    #[test]
    fn toggle_sort_flips_direction_and_arrow() {
        let mut q = QueryState::new();
        assert_eq!(q.sort.arrow(), "↓");
        q.toggle_sort();
        assert_eq!(q.sort, SortDirection::Ascending);
        assert_eq!(q.sort.arrow(), "↑");
        q.toggle_sort();
        assert_eq!(q.sort, SortDirection::Descending);
    }

    #[test]
    fn page_controls_respect_bounds() {
        let mut q = QueryState::new();
        assert!(!q.previous_page());
        assert_eq!(q.page, 1);

        assert!(q.next_page(3));
        assert!(q.next_page(3));
        assert_eq!(q.page, 3);
        assert!(!q.next_page(3));
        assert_eq!(q.page, 3);

        assert!(q.previous_page());
        assert_eq!(q.page, 2);
    }

    #[test]
    fn next_is_noop_when_there_are_no_pages() {
        let mut q = QueryState::new();
        assert!(!q.next_page(0));
        assert_eq!(q.page, 1);
    }

    #[test]
    fn with_page_clamps_zero_to_first_page() {
        assert_eq!(QueryState::new().with_page(0).page, 1);
    }

    #[test]
    fn query_state_deserializes_with_defaults() {
        let q: QueryState = serde_json::from_str(r#"{"search":{"customer":"acme"}}"#).unwrap();
        assert_eq!(q.search_term("customer"), "acme");
        assert_eq!(q.sort, SortDirection::Descending);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn next_page_from_the_largest_page_is_a_no_op() {
        let mut q: QueryState = serde_json::from_str(r#"{"page":18446744073709551615}"#).unwrap();
        assert!(!q.next_page(3));
        assert_eq!(q.page, usize::MAX);

        assert!(q.previous_page());
        assert_eq!(q.page, usize::MAX - 1);
    }
}
