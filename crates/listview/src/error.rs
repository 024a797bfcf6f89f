//! List-view error model.
//!
//! Evaluation itself never fails; these errors come from caller actions
//! (naming a field the record shape does not expose) and configuration loading.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListViewError {
    /// The record shape does not declare this field as free-text searchable.
    #[error("unknown search field `{0}`")]
    UnknownSearchField(String),

    /// The record shape does not declare this field as numeric.
    #[error("unknown numeric field `{0}`")]
    UnknownNumericField(String),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
