//! Layout dimensions and glyphs for TUI rendering.
//!
//! Centralized location for the values the table renderer and status bar
//! share.

/// Height of the status bar in lines.
///
/// Single line at the bottom of the screen for sort, selection and layout
/// state plus keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Appended to the header of an ascending sort column.
pub const SORT_ASCENDING_GLYPH: &str = "▲";

/// Appended to the header of a descending sort column.
pub const SORT_DESCENDING_GLYPH: &str = "▼";

/// Column divider drawn in the gap cell after each column.
pub const COLUMN_DIVIDER: &str = "│";

/// Column divider when the divider thickness is above one.
pub const THICK_COLUMN_DIVIDER: &str = "┃";

/// Line under the header row.
pub const HEADER_SEPARATOR: &str = "─";

/// Where a column divider crosses the header separator.
pub const HEADER_SEPARATOR_JUNCTION: &str = "┼";

/// Line between body rows.
pub const ROW_DIVIDER: &str = "─";

/// Line between body rows when the divider thickness is above one.
pub const THICK_ROW_DIVIDER: &str = "━";

/// Shown in the body when the data set is empty.
pub const EMPTY_TABLE_MESSAGE: &str = "No rows";
