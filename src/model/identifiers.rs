//! Column identifier newtype.
//!
//! Column ids key every per-column map in the table state. The empty id is
//! reserved: it is what an unsorted [`SortState`](super::SortState) reports
//! as its column, so tables reject columns declared with it.

use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a column within one table instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColumnId(String);

impl ColumnId {
    /// Create a column id from any string-like value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the reserved empty id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ColumnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ColumnId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
