//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events,
//! using the layout of the last rendered frame to resolve coordinates.

use crate::state::AppState;
use crate::view_state::{hit_test, HitTarget, TableLayout};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

/// Rows moved per wheel notch.
pub const WHEEL_STEP: isize = 3;

/// Dispatch a mouse event.
///
/// Without a layout (nothing drawn yet) only wheel events apply.
pub fn handle_mouse_event<T: Clone + PartialEq>(
    state: &mut AppState<T>,
    layout: Option<&TableLayout>,
    event: MouseEvent,
) {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(layout) = layout {
                handle_press(state, hit_test(layout, x, y), x);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => handle_drag(state, x),
        MouseEventKind::Up(MouseButton::Left) => state.end_drag(),
        MouseEventKind::Moved => {
            let target = layout.and_then(|layout| hit_test(layout, x, y));
            handle_hover(state, target);
        }
        MouseEventKind::ScrollUp => state.move_cursor(-WHEEL_STEP),
        MouseEventKind::ScrollDown => state.move_cursor(WHEEL_STEP),
        _ => {}
    }
}

/// Left button pressed on `target` at screen column `x`.
///
/// Headers sort and take focus, resize handles start a drag, rows move the
/// cursor and toggle their selection.
pub fn handle_press<T: Clone + PartialEq>(
    state: &mut AppState<T>,
    target: Option<HitTarget>,
    x: u16,
) {
    trace!(?target, x, "Mouse press");
    match target {
        Some(HitTarget::Header(id)) => {
            state.focus_column(&id);
            state.table_mut().header_click(id.as_str());
        }
        Some(HitTarget::ResizeHandle(id)) => state.begin_drag(id, x),
        Some(HitTarget::Row(index)) => {
            state.cursor = Some(index);
            state.table_mut().row_click(index);
        }
        None => {}
    }
}

/// Pointer dragged to screen column `x` with the left button held.
pub fn handle_drag<T: Clone + PartialEq>(state: &mut AppState<T>, x: u16) {
    if let Some(width) = state.drag_to(x) {
        trace!(x, width, "Resize drag");
    }
}

/// Pointer moved over `target` with no button held.
pub fn handle_hover<T: Clone + PartialEq>(state: &mut AppState<T>, target: Option<HitTarget>) {
    let index = match target {
        Some(HitTarget::Row(index)) => Some(index),
        _ => None,
    };
    if state.table().hovered_index() != index {
        state.table_mut().set_hovered(index);
    }
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
