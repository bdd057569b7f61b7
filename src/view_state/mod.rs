//! View-state layer - table geometry and hit-testing (pure).
//!
//! # Module Structure
//!
//! - `table_layout`: TableLayout - column spans, row placement, scroll clamping
//! - `hit_test`: HitTarget - what a screen cell belongs to

pub mod table_layout;

pub use hit_test::{hit_test, HitTarget};
pub use table_layout::{ColumnSpan, TableLayout, TableScroll, COLUMN_GAP, HEADER_LINES};
