//! Application state and transitions.
//!
//! AppState is the root state of the sample application: one table plus
//! the UI state around it (row cursor, focused column, scroll position and
//! an in-progress resize drag). Transitions are plain methods; nothing here
//! touches the terminal.

use crate::model::ColumnId;
use crate::table_state::TableViewModel;
use crate::view_state::{TableLayout, TableScroll};
use ratatui::layout::Rect;
use tracing::debug;

/// Cells scrolled per horizontal scroll step.
pub const HORIZONTAL_SCROLL_STEP: u32 = 4;

// ===== ResizeDrag =====

/// A resize gesture in progress on a column's handle.
///
/// The width follows the pointer relative to where the gesture started, so
/// dragging past a bound and back returns to the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDrag {
    /// Column being resized.
    pub column: ColumnId,
    /// Screen column where the press happened.
    pub origin_x: u16,
    /// Stored width at press time.
    pub origin_width: u16,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
#[derive(Debug)]
pub struct AppState<T> {
    table: TableViewModel<T>,

    /// Title drawn on the table outline.
    pub title: String,

    /// Display index of the keyboard row cursor.
    /// `None` only when the table has no rows.
    pub cursor: Option<usize>,

    /// Column targeted by column actions (sort, resize, hide).
    pub focused_column: Option<ColumnId>,

    /// Viewport scroll position. Clamped during layout.
    pub scroll: TableScroll,

    /// Resize gesture in progress.
    pub drag: Option<ResizeDrag>,
}

impl<T: Clone + PartialEq> AppState<T> {
    /// Wrap a mounted table. The cursor starts on the first row and the
    /// first visible column has focus.
    pub fn new(table: TableViewModel<T>, title: impl Into<String>) -> Self {
        let cursor = (table.row_count() > 0).then_some(0);
        let focused_column = table.visible_ids().first().cloned();
        Self {
            table,
            title: title.into(),
            cursor,
            focused_column,
            scroll: TableScroll::default(),
            drag: None,
        }
    }

    /// The table.
    pub fn table(&self) -> &TableViewModel<T> {
        &self.table
    }

    /// The table, mutably.
    pub fn table_mut(&mut self) -> &mut TableViewModel<T> {
        &mut self.table
    }

    /// Lay the table out in `area`, clamping the scroll position so the
    /// cursor stays visible.
    pub fn layout(&mut self, area: Rect) -> TableLayout {
        TableLayout::compute(area, &mut self.table, &mut self.scroll, self.cursor)
    }

    // ===== Row cursor =====

    /// Move the cursor by `delta` rows, stopping at either end.
    pub fn move_cursor(&mut self, delta: isize) {
        let rows = self.table.row_count();
        if rows == 0 {
            self.cursor = None;
            return;
        }
        let current = self.cursor.unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(rows - 1);
        self.cursor = Some(target);
    }

    /// Put the cursor on the first row.
    pub fn cursor_first(&mut self) {
        self.cursor = (self.table.row_count() > 0).then_some(0);
    }

    /// Put the cursor on the last row.
    pub fn cursor_last(&mut self) {
        self.cursor = self.table.row_count().checked_sub(1);
    }

    /// Select or deselect the row under the cursor.
    pub fn toggle_cursor_row(&mut self) {
        if let Some(index) = self.cursor {
            self.table.row_click(index);
        }
    }

    // ===== Column focus =====

    /// Focus `id` if it is a visible column.
    pub fn focus_column(&mut self, id: &ColumnId) {
        if self.table.visible_ids().contains(id) {
            self.focused_column = Some(id.clone());
        }
    }

    /// Focus the next visible column, wrapping around.
    pub fn focus_next_column(&mut self) {
        self.step_focus(1);
    }

    /// Focus the previous visible column, wrapping around.
    pub fn focus_prev_column(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, step: isize) {
        let ids = self.table.visible_ids();
        if ids.is_empty() {
            self.focused_column = None;
            return;
        }
        let count = ids.len() as isize;
        let next = match self.focused_position() {
            Some(pos) => (pos as isize + step).rem_euclid(count),
            None => 0,
        };
        self.focused_column = Some(ids[next as usize].clone());
    }

    fn focused_position(&self) -> Option<usize> {
        let focused = self.focused_column.as_ref()?;
        self.table.visible_ids().iter().position(|id| id == focused)
    }

    // ===== Column actions =====

    /// Advance the sort cycle of the focused column.
    pub fn sort_focused_column(&mut self) {
        if let Some(id) = &self.focused_column {
            self.table.header_click(id.as_str());
        }
    }

    /// Grow (positive) or shrink (negative) the focused column.
    pub fn resize_focused_column(&mut self, delta: i32) {
        if let Some(id) = &self.focused_column {
            self.table.resize_delta(id.as_str(), delta);
        }
    }

    /// Hide the focused column and focus its right neighbour.
    ///
    /// The last visible column cannot be hidden.
    pub fn hide_focused_column(&mut self) {
        if self.table.visible_ids().len() <= 1 {
            debug!("Refusing to hide the last visible column");
            return;
        }
        let Some(pos) = self.focused_position() else {
            return;
        };
        let id = self.table.visible_ids()[pos].clone();
        self.table.set_column_visible(id.as_str(), false);
        let ids = self.table.visible_ids();
        self.focused_column = ids.get(pos.min(ids.len() - 1)).cloned();
    }

    /// Make every column visible again.
    pub fn show_all_columns(&mut self) {
        let hidden: Vec<ColumnId> = self
            .table
            .columns()
            .iter()
            .filter(|c| !c.is_visible())
            .map(|c| c.id().clone())
            .collect();
        for id in hidden {
            self.table.set_column_visible(id.as_str(), true);
        }
        if self.focused_column.is_none() {
            self.focused_column = self.table.visible_ids().first().cloned();
        }
    }

    // ===== Settings =====

    /// Flip the table outline.
    pub fn toggle_outline(&mut self) {
        let mut settings = self.table.settings().clone();
        settings.outlined = !settings.outlined;
        self.table.set_settings(settings);
    }

    /// Flip between unconstrained and constrained layout.
    pub fn toggle_layout_mode(&mut self) {
        let mode = self.table.layout_mode().toggled();
        debug!(mode = %mode, "Layout mode changed");
        self.table.set_layout_mode(mode);
    }

    /// Flip between single and multiple selection.
    pub fn toggle_selection_mode(&mut self) {
        let mode = self.table.selection_mode().toggled();
        debug!(mode = %mode, "Selection mode changed");
        self.table.set_selection_mode(mode);
    }

    // ===== Scrolling =====

    /// Scroll one step left.
    pub fn scroll_left(&mut self) {
        self.scroll.col_offset = self.scroll.col_offset.saturating_sub(HORIZONTAL_SCROLL_STEP);
    }

    /// Scroll one step right. Layout clamps overshoot.
    pub fn scroll_right(&mut self) {
        self.scroll.col_offset = self.scroll.col_offset.saturating_add(HORIZONTAL_SCROLL_STEP);
    }

    // ===== Resize drag =====

    /// Start a resize gesture on `column` at screen column `x`.
    pub fn begin_drag(&mut self, column: ColumnId, x: u16) {
        let Some(origin_width) = self.table.widths().width(column.as_str()) else {
            return;
        };
        debug!(column = %column, x, "Resize drag started");
        self.focused_column = Some(column.clone());
        self.drag = Some(ResizeDrag {
            column,
            origin_x: x,
            origin_width,
        });
    }

    /// Pointer moved to screen column `x` during a gesture.
    ///
    /// Returns the stored width after the move, or `None` without a gesture.
    pub fn drag_to(&mut self, x: u16) -> Option<u16> {
        let drag = self.drag.as_ref()?;
        let proposed = i32::from(drag.origin_width) + i32::from(x) - i32::from(drag.origin_x);
        let column = drag.column.clone();
        self.table.set_width(column.as_str(), proposed)
    }

    /// Finish the gesture.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(
                column = %drag.column,
                width = ?self.table.widths().width(drag.column.as_str()),
                "Resize drag finished"
            );
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
