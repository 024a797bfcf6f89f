//! Filter stage.

use std::collections::BTreeMap;

use crate::query::NumericTerm;
use crate::record::Listable;

/// Keep the records matching **all** active terms.
///
/// - Text terms: case-insensitive substring match on the field's value. A record
///   with no value for the field fails an active term on it.
/// - Numeric terms: exact equality with the parsed target.
/// - Empty text terms and `Unset` numeric terms always match.
///
/// Input order is preserved. No match yields an empty vector.
pub fn filter<'a, R: Listable>(
    records: &'a [R],
    search: &BTreeMap<String, String>,
    numeric: &BTreeMap<String, NumericTerm>,
) -> Vec<&'a R> {
    let needles: Vec<(&str, String)> = search
        .iter()
        .filter(|(_, term)| !term.is_empty())
        .map(|(field, term)| (field.as_str(), term.to_lowercase()))
        .collect();

    let targets: Vec<(&str, &NumericTerm)> = numeric
        .iter()
        .filter(|(_, term)| term.is_active())
        .map(|(field, term)| (field.as_str(), term))
        .collect();

    records
        .iter()
        .filter(|record| {
            needles
                .iter()
                .all(|(field, needle)| contains_ignore_case(record.search_text(field), needle))
                && targets
                    .iter()
                    .all(|(field, term)| term.matches(record.numeric_value(field)))
        })
        .collect()
}

fn contains_ignore_case(value: Option<&str>, lowered_needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(lowered_needle))
}
