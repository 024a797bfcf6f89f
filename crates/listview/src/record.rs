//! Record capability consumed by the engine.

use chrono::{DateTime, Utc};
use tenantdesk_core::Entity;

/// Field accessors for one record shape.
///
/// Implemented once per row type (API key, order, usage event). The associated
/// constants are that call site's configuration: which fields its search boxes
/// address.
pub trait Listable: Entity {
    /// Fields that accept a case-insensitive substring term.
    const SEARCH_FIELDS: &'static [&'static str];

    /// Fields that accept an exact numeric-equality term.
    const NUMERIC_FIELDS: &'static [&'static str] = &[];

    /// Creation instant; the only sort key.
    fn created_at(&self) -> DateTime<Utc>;

    /// Free-text value of `field`, or `None` when the record has no value.
    fn search_text(&self, field: &str) -> Option<&str>;

    /// Numeric value of `field`, or `None` when the record has no value.
    fn numeric_value(&self, _field: &str) -> Option<f64> {
        None
    }
}
