//! Selection model: selected rows under a single/multiple policy.
//!
//! Items and indices are tracked as two parallel sequences in selection
//! order. Item membership uses `PartialEq` on `T`; index membership is by
//! display position. The two can disagree once rows are re-sorted, which is
//! expected: item lookup follows a row wherever it moves, index lookup
//! answers "is this display slot selected".

use crate::model::SelectionMode;
use std::fmt;
use tracing::debug;

/// Callback receiving the selected items after every selection mutation.
pub type SelectionListener<T> = Box<dyn FnMut(&[T])>;

/// Owns the selection of one table.
pub struct SelectionModel<T> {
    mode: SelectionMode,
    items: Vec<T>,
    indices: Vec<usize>,
    listener: Option<SelectionListener<T>>,
}

impl<T: Clone + PartialEq> SelectionModel<T> {
    /// Empty selection under `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            items: Vec::new(),
            indices: Vec::new(),
            listener: None,
        }
    }

    /// Install the change listener, replacing any previous one.
    ///
    /// The listener runs synchronously after each mutation, including
    /// mutations that leave the selection unchanged.
    pub fn set_listener(&mut self, listener: impl FnMut(&[T]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Current policy.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Change the policy.
    ///
    /// Switching to `Single` with more than one selected row keeps only the
    /// most recently selected one (and notifies).
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode == SelectionMode::Single && (self.items.len() > 1 || self.indices.len() > 1) {
            keep_last(&mut self.items);
            keep_last(&mut self.indices);
            debug!("Selection truncated on switch to single mode");
            self.notify();
        }
    }

    /// Select `item` shown at `index`.
    ///
    /// Single mode replaces the whole selection. Multiple mode appends unless
    /// the item is already selected.
    pub fn select(&mut self, item: T, index: usize) {
        match self.mode {
            SelectionMode::Single => {
                self.items.clear();
                self.indices.clear();
                self.items.push(item);
                self.indices.push(index);
            }
            SelectionMode::Multiple => {
                if !self.items.contains(&item) {
                    self.items.push(item);
                    self.indices.push(index);
                }
            }
        }
        self.notify();
    }

    /// Remove the `(item, index)` pair from the selection.
    ///
    /// The pair is found by item, so an index that went stale after a
    /// re-sort still leaves with its item. Only when `item` is absent is the
    /// pair matched by `index`.
    pub fn deselect(&mut self, item: &T, index: usize) {
        let pos = self
            .items
            .iter()
            .position(|selected| selected == item)
            .or_else(|| self.indices.iter().position(|&selected| selected == index));
        if let Some(pos) = pos {
            self.items.remove(pos);
            self.indices.remove(pos);
        }
        self.notify();
    }

    /// Drop every selected item and index.
    pub fn clear(&mut self) {
        self.items.clear();
        self.indices.clear();
        self.notify();
    }

    /// Select every item of `items` at indices `0..n`.
    ///
    /// Ignored in single mode.
    pub fn select_all(&mut self, items: &[T]) {
        if self.mode == SelectionMode::Single {
            debug!("Ignoring select-all in single selection mode");
            return;
        }
        self.items = items.to_vec();
        self.indices = (0..items.len()).collect();
        self.notify();
    }

    /// Whether `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Whether display position `index` is selected.
    pub fn is_index_selected(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Selected items in selection order.
    pub fn selected_items(&self) -> &[T] {
        &self.items
    }

    /// Selected indices in selection order.
    pub fn selected_indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn notify(&mut self) {
        if let Some(listener) = &mut self.listener {
            listener(&self.items);
        }
    }
}

fn keep_last<V>(values: &mut Vec<V>) {
    if values.len() > 1 {
        values.drain(..values.len() - 1);
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectionModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionModel")
            .field("mode", &self.mode)
            .field("items", &self.items)
            .field("indices", &self.indices)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
