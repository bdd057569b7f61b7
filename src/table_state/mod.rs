//! Interactive table state (pure).
//!
//! Each model owns one concern: widths, sort, selection. [`TableViewModel`]
//! composes them over one column set and one data set.

pub mod selection;
pub mod settings;
pub mod sort;
pub mod view_model;
pub mod width;

// Re-export for convenience
pub use selection::{SelectionListener, SelectionModel};
pub use settings::{Features, TableSettings, RECORD_ARITY};
pub use sort::SortController;
pub use view_model::TableViewModel;
pub use width::{ColumnWidth, ColumnWidthModel, ResolvedWidths};
