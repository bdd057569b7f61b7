//! gridkit
//!
//! Interactive data tables for terminal applications: sortable, resizable
//! and selectable columns over any row type, with persisted settings.
//!
//! The crate follows a pure core / impure shell split:
//!
//! - `model`, `table_state`, `view_state` and `state` are pure and testable
//!   without a terminal
//! - `view` owns the terminal, `config` and `logging` touch the filesystem

pub mod config;
pub mod logging;
pub mod model;
pub mod sample;
pub mod state;
pub mod table_state;
pub mod view;
pub mod view_state;
