//! Table view model: composes the width, sort and selection models over one
//! column set and one data set, and derives what the rendering surface draws.
//!
//! Every inbound event mutates exactly one model. Derived values (display
//! order, resolved widths) are recomputed only when one of their inputs
//! changed: data, sort state, stored widths, layout mode, viewport width or
//! the visible column set.

use super::selection::SelectionModel;
use super::settings::TableSettings;
use super::sort::SortController;
use super::width::{ColumnWidthModel, ResolvedWidths};
use crate::model::{
    Column, ColumnId, LayoutMode, RestoreError, SelectionMode, SortState, TableError,
};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

/// Inputs of the cached display order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderParams {
    data_revision: u64,
    columns_revision: u64,
    sort: SortState,
}

/// Interactive state of one table instance.
#[derive(Debug)]
pub struct TableViewModel<T> {
    columns: Vec<Column<T>>,
    columns_revision: u64,
    visible_ids: Vec<ColumnId>,
    rows: Vec<T>,
    data_revision: u64,
    widths: ColumnWidthModel,
    sort: SortController,
    selection: SelectionModel<T>,
    settings: TableSettings,
    hovered: Option<usize>,
    order_params: Option<OrderParams>,
    display_order: Vec<usize>,
    order_recomputes: u64,
}

impl<T: Clone + PartialEq> TableViewModel<T> {
    /// Mount a table.
    ///
    /// Seeds widths from the columns, starts unsorted, and selects
    /// `settings.default_selected` (indices past the end are ignored).
    pub fn new(
        columns: Vec<Column<T>>,
        rows: Vec<T>,
        settings: TableSettings,
    ) -> Result<Self, TableError> {
        validate_columns(&columns)?;

        let widths = ColumnWidthModel::new(&columns, settings.resize_mode);
        let selection = SelectionModel::new(settings.selection_mode);
        let mut model = Self {
            visible_ids: visible_ids(&columns),
            columns,
            columns_revision: 0,
            rows,
            data_revision: 0,
            widths,
            sort: SortController::new(),
            selection,
            settings,
            hovered: None,
            order_params: None,
            display_order: Vec::new(),
            order_recomputes: 0,
        };
        model.refresh_order();

        for index in model.settings.default_selected.clone() {
            match model.row_at(index).cloned() {
                Some(item) => model.selection.select(item, index),
                None => debug!(index, "Skipping default selection past end of data"),
            }
        }
        Ok(model)
    }

    // ===== Columns =====

    /// All columns, visible or not.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Column by id.
    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id().as_str() == id)
    }

    /// Visible columns in display order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter().filter(|c| c.is_visible())
    }

    /// Ids of the visible columns in display order.
    pub fn visible_ids(&self) -> &[ColumnId] {
        &self.visible_ids
    }

    /// Replace the column set.
    ///
    /// New ids get their declared width; ids seen before keep their stored
    /// width. The sort state is kept even if its column disappeared.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) -> Result<(), TableError> {
        validate_columns(&columns)?;
        self.widths.seed(&columns);
        self.visible_ids = visible_ids(&columns);
        self.columns = columns;
        self.columns_revision += 1;
        self.refresh_order();
        Ok(())
    }

    /// Show or hide a column. Returns whether anything changed.
    pub fn set_column_visible(&mut self, id: &str, visible: bool) -> bool {
        let Some(pos) = self.columns.iter().position(|c| c.id().as_str() == id) else {
            return false;
        };
        if self.columns[pos].is_visible() == visible {
            return false;
        }
        let column = self.columns[pos].clone().with_visible(visible);
        self.columns[pos] = column;
        self.visible_ids = visible_ids(&self.columns);
        debug!(column = id, visible, "Column visibility changed");
        true
    }

    // ===== Data =====

    /// Rows in insertion order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Replace the data. Sort state and selection are kept.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.data_revision += 1;
        if self.hovered.is_some_and(|i| i >= self.rows.len()) {
            self.hovered = None;
        }
        self.refresh_order();
    }

    /// Display order as indices into [`TableViewModel::rows`].
    pub fn display_order(&self) -> &[usize] {
        &self.display_order
    }

    /// Rows in display order.
    pub fn sorted_rows(&self) -> Vec<&T> {
        self.display_order.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Row shown at `display_index`.
    pub fn row_at(&self, display_index: usize) -> Option<&T> {
        self.display_order
            .get(display_index)
            .and_then(|&i| self.rows.get(i))
    }

    /// How many times the display order was actually recomputed.
    pub fn order_recompute_count(&self) -> u64 {
        self.order_recomputes
    }

    // ===== Sorting =====

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        self.sort.state()
    }

    /// Header activation: advance the sort cycle of `column_id`.
    ///
    /// Ignored when sorting is disabled. Returns whether the sort changed.
    pub fn header_click(&mut self, column_id: &str) -> bool {
        if !self.settings.features.sorting {
            return false;
        }
        let changed = self.sort.toggle(column_id, &self.columns);
        if changed {
            self.refresh_order();
        }
        changed
    }

    // ===== Widths =====

    /// The width model.
    pub fn widths(&self) -> &ColumnWidthModel {
        &self.widths
    }

    /// Drag step on `column_id`'s resize handle.
    ///
    /// Ignored when resizing is disabled. Returns the stored width after the
    /// step, or `None` if the request was ignored.
    pub fn resize_delta(&mut self, column_id: &str, delta: i32) -> Option<u16> {
        if !self.settings.features.resizing {
            return None;
        }
        self.widths.resize_by(column_id, delta)
    }

    /// Set the stored width of `column_id` directly (clamped).
    pub fn set_width(&mut self, column_id: &str, proposed: i32) -> Option<u16> {
        if !self.settings.features.resizing {
            return None;
        }
        self.widths.set_width(column_id, proposed)
    }

    /// The rendering surface measured `width` cells available for columns.
    pub fn viewport_measured(&mut self, width: u16) {
        self.widths.set_available_width(width);
    }

    /// Current layout policy.
    pub fn layout_mode(&self) -> LayoutMode {
        self.settings.resize_mode
    }

    /// Change the layout policy.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.settings.resize_mode = mode;
        self.widths.set_layout_mode(mode);
    }

    /// Display widths of the visible columns (memoized).
    pub fn resolved_widths(&mut self) -> &ResolvedWidths {
        self.widths.resolved_widths(&self.visible_ids)
    }

    // ===== Selection =====

    /// The selection model.
    pub fn selection(&self) -> &SelectionModel<T> {
        &self.selection
    }

    /// Install the selection change listener.
    pub fn set_selection_listener(&mut self, listener: impl FnMut(&[T]) + 'static) {
        self.selection.set_listener(listener);
    }

    /// Row activation at `display_index`: deselects a selected row, selects
    /// any other.
    ///
    /// Ignored when selection is disabled or the index is out of range.
    pub fn row_click(&mut self, display_index: usize) -> bool {
        if !self.settings.features.selection {
            return false;
        }
        let Some(item) = self.row_at(display_index).cloned() else {
            return false;
        };
        if self.selection.is_selected(&item) {
            debug!(index = display_index, "Row deselected");
            self.selection.deselect(&item, display_index);
        } else {
            debug!(index = display_index, "Row selected");
            self.selection.select(item, display_index);
        }
        true
    }

    /// Select every row in display order (multiple mode only).
    pub fn select_all(&mut self) {
        if !self.settings.features.selection {
            return;
        }
        let items: Vec<T> = self
            .display_order
            .iter()
            .map(|&i| self.rows[i].clone())
            .collect();
        self.selection.select_all(&items);
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Current selection policy.
    pub fn selection_mode(&self) -> SelectionMode {
        self.settings.selection_mode
    }

    /// Change the selection policy.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.settings.selection_mode = mode;
        self.selection.set_mode(mode);
    }

    /// Display indices whose row is selected.
    ///
    /// Keyed by item membership, so highlights follow rows through re-sorts.
    pub fn selection_highlight_set(&self) -> BTreeSet<usize> {
        self.display_order
            .iter()
            .enumerate()
            .filter(|&(_, &i)| self.selection.is_selected(&self.rows[i]))
            .map(|(display, _)| display)
            .collect()
    }

    // ===== Hover =====

    /// Display index under the pointer.
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer moved over `display_index` (or off the body).
    ///
    /// Out-of-range indices clear the hover; with hover disabled it stays
    /// cleared.
    pub fn set_hovered(&mut self, display_index: Option<usize>) {
        self.hovered = if self.settings.features.hover {
            display_index.filter(|&i| i < self.rows.len())
        } else {
            None
        };
    }

    // ===== Settings =====

    /// Current settings.
    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Apply new settings.
    ///
    /// Modes propagate to the width and selection models. Default selection
    /// only applies at mount and is not re-run here.
    pub fn set_settings(&mut self, settings: TableSettings) {
        self.widths.set_layout_mode(settings.resize_mode);
        self.selection.set_mode(settings.selection_mode);
        if !settings.features.hover {
            self.hovered = None;
        }
        self.settings = settings;
    }

    /// Settings as a persisted record.
    pub fn persisted_record(&self) -> Vec<Value> {
        self.settings.to_record()
    }

    /// Restore settings from a persisted record.
    ///
    /// On error nothing is applied and the current settings stay.
    pub fn restore_record(&mut self, record: &[Value]) -> Result<(), RestoreError> {
        match TableSettings::from_record(record) {
            Ok(settings) => {
                self.set_settings(settings);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Rejected persisted table record");
                Err(err)
            }
        }
    }

    fn refresh_order(&mut self) {
        let params = OrderParams {
            data_revision: self.data_revision,
            columns_revision: self.columns_revision,
            sort: self.sort.state().clone(),
        };
        if self.order_params.as_ref() == Some(&params) {
            return;
        }
        self.display_order = self.sort.sorted_indices(&self.rows, &self.columns);
        self.order_params = Some(params);
        self.order_recomputes += 1;
    }
}

fn validate_columns<T>(columns: &[Column<T>]) -> Result<(), TableError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for (position, column) in columns.iter().enumerate() {
        if column.id().is_empty() {
            return Err(TableError::EmptyColumnId(position));
        }
        if !seen.insert(column.id()) {
            return Err(TableError::DuplicateColumnId(column.id().clone()));
        }
    }
    Ok(())
}

fn visible_ids<T>(columns: &[Column<T>]) -> Vec<ColumnId> {
    columns
        .iter()
        .filter(|c| c.is_visible())
        .map(|c| c.id().clone())
        .collect()
}

#[cfg(test)]
#[path = "view_model_tests.rs"]
mod tests;
