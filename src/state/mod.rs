//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod key_handler;
pub mod mouse_handler;

// Re-export for convenience
pub use app_state::{AppState, ResizeDrag, HORIZONTAL_SCROLL_STEP};
pub use key_handler::handle_key_action;
pub use mouse_handler::handle_mouse_event;
