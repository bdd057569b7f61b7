//! Domain model types (pure).
//!
//! Column definitions, sort state and policy enums. Nothing in here owns
//! mutable table state; see [`crate::table_state`] for that.

pub mod column;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod modes;
pub mod sort;

// Re-export for convenience
pub use column::{CellRenderer, Column, Comparator, ValueExtractor};
pub use error::{RestoreError, TableError};
pub use identifiers::ColumnId;
pub use key_action::KeyAction;
pub use modes::{InvalidModeName, LayoutMode, SelectionMode};
pub use sort::{SortOrder, SortState};
