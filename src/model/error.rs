//! Error types for table construction and state restoration.
//!
//! Interactive operations on a table never fail: invalid input degrades to
//! the prior valid state. Errors only exist at the two boundaries where the
//! caller must learn that nothing happened:
//!
//! - [`TableError`]: the column set handed to a new table is unusable.
//! - [`RestoreError`]: a persisted record was malformed and was not applied.

use super::identifiers::ColumnId;
use thiserror::Error;

/// Failure to build a table from a column set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two columns share the same id.
    #[error("Duplicate column id: {0}")]
    DuplicateColumnId(ColumnId),

    /// A column was declared with the empty id, which is reserved for the
    /// unsorted state.
    #[error("Column at position {0} has an empty id")]
    EmptyColumnId(usize),
}

/// Failure to restore table settings from a persisted record.
///
/// Restoration is all-or-nothing; on any of these the caller keeps its
/// prior settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// The record has the wrong number of fields.
    #[error("Persisted record has {actual} fields, expected {expected}")]
    Arity {
        /// Field count the format requires.
        expected: usize,
        /// Field count found.
        actual: usize,
    },

    /// A field holds a value of the wrong primitive type.
    #[error("Persisted field {index} ({field}) is not a {expected}")]
    FieldType {
        /// Position in the record.
        index: usize,
        /// Field name.
        field: &'static str,
        /// Required primitive type.
        expected: &'static str,
    },

    /// A field has the right type but an unusable value.
    #[error("Persisted field {index} ({field}) has invalid value {value:?}")]
    FieldValue {
        /// Position in the record.
        index: usize,
        /// Field name.
        field: &'static str,
        /// The rejected value, rendered as text.
        value: String,
    },
}
