//! Keyboard action handler.
//!
//! Pure function that applies a [`KeyAction`] to [`AppState`].

use crate::model::KeyAction;
use crate::state::AppState;

/// Cells added or removed per widen/narrow key press.
pub const RESIZE_STEP: i32 = 1;

/// Rows moved per page key press.
pub const PAGE_STEP: isize = 10;

/// Apply a keyboard action to the state.
///
/// `Quit` is handled by the event loop and is a no-op here.
pub fn handle_key_action<T: Clone + PartialEq>(state: &mut AppState<T>, action: KeyAction) {
    match action {
        // Row cursor
        KeyAction::CursorUp => state.move_cursor(-1),
        KeyAction::CursorDown => state.move_cursor(1),
        KeyAction::PageUp => state.move_cursor(-PAGE_STEP),
        KeyAction::PageDown => state.move_cursor(PAGE_STEP),
        KeyAction::CursorFirst => state.cursor_first(),
        KeyAction::CursorLast => state.cursor_last(),

        // Selection
        KeyAction::ToggleRowSelection => state.toggle_cursor_row(),
        KeyAction::SelectAll => state.table_mut().select_all(),
        KeyAction::ClearSelection => state.table_mut().clear_selection(),
        KeyAction::ToggleSelectionMode => state.toggle_selection_mode(),

        // Columns
        KeyAction::NextColumn => state.focus_next_column(),
        KeyAction::PrevColumn => state.focus_prev_column(),
        KeyAction::SortFocusedColumn => state.sort_focused_column(),
        KeyAction::WidenColumn => state.resize_focused_column(RESIZE_STEP),
        KeyAction::NarrowColumn => state.resize_focused_column(-RESIZE_STEP),
        KeyAction::HideColumn => state.hide_focused_column(),
        KeyAction::ShowAllColumns => state.show_all_columns(),
        KeyAction::ToggleLayoutMode => state.toggle_layout_mode(),

        // Viewport
        KeyAction::ScrollLeft => state.scroll_left(),
        KeyAction::ScrollRight => state.scroll_right(),
        KeyAction::ToggleOutline => state.toggle_outline(),

        KeyAction::Quit => {}
    }
}

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
