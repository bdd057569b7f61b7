//! Sort controller: the single active sort column and a stable ordering of
//! rows under it.

use crate::model::{Column, SortOrder, SortState};
use tracing::debug;

/// Owns the sort state of one table.
#[derive(Debug, Clone, Default)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    /// Start unsorted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known state.
    pub fn with_state(state: SortState) -> Self {
        Self { state }
    }

    /// Current state.
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Advance the three-way cycle for `column_id`.
    ///
    /// Ignored when the column is unknown or not sortable. Returns whether
    /// the state changed.
    pub fn toggle<T>(&mut self, column_id: &str, columns: &[Column<T>]) -> bool {
        let Some(column) = find_column(columns, column_id) else {
            debug!(column = column_id, "Ignoring sort toggle on unknown column");
            return false;
        };
        if !column.is_sortable() {
            debug!(column = column_id, "Ignoring sort toggle on unsortable column");
            return false;
        }
        self.state = self.state.toggled(column.id());
        debug!(
            column = %self.state.column_id(),
            order = ?self.state.order(),
            "Sort state changed"
        );
        true
    }

    /// Rows in display order. `rows` itself is never reordered.
    pub fn apply<'a, T>(&self, rows: &'a [T], columns: &[Column<T>]) -> Vec<&'a T> {
        self.sorted_indices(rows, columns)
            .into_iter()
            .map(|i| &rows[i])
            .collect()
    }

    /// Display order as indices into `rows`.
    ///
    /// Unsorted, or sorted by a column that is no longer in `columns`,
    /// yields insertion order. Ties keep their insertion order in both
    /// directions.
    pub fn sorted_indices<T>(&self, rows: &[T], columns: &[Column<T>]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rows.len()).collect();
        if !self.state.is_sorted() {
            return order;
        }
        let Some(column) = find_column(columns, self.state.column_id().as_str()) else {
            return order;
        };

        let descending = self.state.order() == SortOrder::Descending;
        // sort_by is stable, and reversing an Equal keeps it Equal
        order.sort_by(|&a, &b| {
            let ordering = column.compare(&rows[a], &rows[b]);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        order
    }
}

fn find_column<'c, T>(columns: &'c [Column<T>], id: &str) -> Option<&'c Column<T>> {
    columns.iter().find(|c| c.id().as_str() == id)
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
