//! Column width model: per-column stored widths, resize clamping, and the
//! two layout policies.
//!
//! Stored widths are only changed by [`ColumnWidthModel::set_width`] (and its
//! delta form). The constrained layout's surplus distribution is a display
//! concern and never writes back into the stored widths.

use crate::model::{Column, ColumnId, LayoutMode};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Stored width and resize bounds of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidth {
    /// Current stored width in cells.
    pub width: u16,
    /// Lower resize bound.
    pub min: u16,
    /// Upper resize bound.
    pub max: u16,
    /// Whether resize requests are honoured.
    pub resizable: bool,
}

impl ColumnWidth {
    fn from_column<T>(column: &Column<T>) -> Self {
        Self {
            width: column.width(),
            min: column.min_width(),
            max: column.max_width(),
            resizable: column.is_resizable(),
        }
    }

    /// Clamp a proposed width into `[min, max]`.
    pub fn clamp(&self, proposed: i32) -> u16 {
        // min <= max is guaranteed by Column::max_width
        proposed.clamp(i32::from(self.min), i32::from(self.max)) as u16
    }
}

/// Display widths of the visible columns, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedWidths {
    entries: Vec<(ColumnId, u16)>,
}

impl ResolvedWidths {
    /// Width of `id`, if it is a visible column.
    pub fn get(&self, id: &str) -> Option<u16> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id.as_str() == id)
            .map(|&(_, width)| width)
    }

    /// `(id, width)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, u16)> {
        self.entries.iter().map(|(id, width)| (id, *width))
    }

    /// Sum of all widths.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, w)| u32::from(w)).sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no column is visible.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every input the resolved widths depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WidthParams {
    available_width: u16,
    layout_mode: LayoutMode,
    revision: u64,
    visible: Vec<ColumnId>,
}

/// Owns the resizable width of every column of one table.
#[derive(Debug, Clone)]
pub struct ColumnWidthModel {
    widths: HashMap<ColumnId, ColumnWidth>,
    layout_mode: LayoutMode,
    available_width: u16,
    /// Bumped whenever a stored width or bound changes.
    revision: u64,
    cache_params: Option<WidthParams>,
    resolved: ResolvedWidths,
    recomputes: u64,
}

impl ColumnWidthModel {
    /// Seed stored widths from each column's declared width.
    pub fn new<T>(columns: &[Column<T>], layout_mode: LayoutMode) -> Self {
        let mut model = Self {
            widths: HashMap::with_capacity(columns.len()),
            layout_mode,
            available_width: 0,
            revision: 0,
            cache_params: None,
            resolved: ResolvedWidths::default(),
            recomputes: 0,
        };
        model.seed(columns);
        model
    }

    /// Add entries for columns not seen before.
    ///
    /// Existing entries keep their stored width (a column toggled invisible
    /// and back keeps its size); only bounds and resizability are refreshed.
    pub fn seed<T>(&mut self, columns: &[Column<T>]) {
        for column in columns {
            let declared = ColumnWidth::from_column(column);
            match self.widths.get_mut(column.id()) {
                Some(existing) => {
                    let refreshed = ColumnWidth {
                        width: declared.clamp(i32::from(existing.width)),
                        ..declared
                    };
                    if *existing != refreshed {
                        *existing = refreshed;
                        self.revision += 1;
                    }
                }
                None => {
                    self.widths.insert(column.id().clone(), declared);
                    self.revision += 1;
                }
            }
        }
    }

    /// Stored width of `id`.
    pub fn width(&self, id: &str) -> Option<u16> {
        self.widths.get(id).map(|w| w.width)
    }

    /// Stored width and bounds of `id`.
    pub fn column_width(&self, id: &str) -> Option<ColumnWidth> {
        self.widths.get(id).copied()
    }

    /// Store `proposed` for `id`, clamped to the column's bounds.
    ///
    /// Returns the stored width, or `None` when the request was ignored
    /// (unknown or non-resizable column). O(1); safe to call on every
    /// drag event.
    pub fn set_width(&mut self, id: &str, proposed: i32) -> Option<u16> {
        let Some(entry) = self.widths.get_mut(id) else {
            debug!(column = id, "Ignoring resize of unknown column");
            return None;
        };
        if !entry.resizable {
            debug!(column = id, "Ignoring resize of non-resizable column");
            return None;
        }
        let clamped = entry.clamp(proposed);
        if clamped != entry.width {
            trace!(column = id, proposed, clamped, "Column resized");
            entry.width = clamped;
            self.revision += 1;
        }
        Some(clamped)
    }

    /// Grow (positive) or shrink (negative) the stored width of `id`.
    pub fn resize_by(&mut self, id: &str, delta: i32) -> Option<u16> {
        let current = self.width(id)?;
        self.set_width(id, i32::from(current).saturating_add(delta))
    }

    /// Current layout policy.
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    /// Change the layout policy.
    pub fn set_layout_mode(&mut self, layout_mode: LayoutMode) {
        self.layout_mode = layout_mode;
    }

    /// Last measured viewport width.
    pub fn available_width(&self) -> u16 {
        self.available_width
    }

    /// Record a new viewport measurement.
    pub fn set_available_width(&mut self, available_width: u16) {
        self.available_width = available_width;
    }

    /// Display widths of `visible` columns under the current layout policy.
    ///
    /// Memoized: recomputed only when the viewport width, a stored width,
    /// the layout mode or the visible column list changed since the last
    /// call. Ids with no stored width are skipped.
    pub fn resolved_widths(&mut self, visible: &[ColumnId]) -> &ResolvedWidths {
        let fresh = self.cache_params.as_ref().is_some_and(|p| {
            p.available_width == self.available_width
                && p.layout_mode == self.layout_mode
                && p.revision == self.revision
                && p.visible == visible
        });
        if !fresh {
            self.resolved = self.compute(visible);
            self.cache_params = Some(WidthParams {
                available_width: self.available_width,
                layout_mode: self.layout_mode,
                revision: self.revision,
                visible: visible.to_vec(),
            });
            self.recomputes += 1;
        }
        &self.resolved
    }

    /// How many times the resolved widths were actually recomputed.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    fn compute(&self, visible: &[ColumnId]) -> ResolvedWidths {
        let mut entries: Vec<(ColumnId, u16)> = visible
            .iter()
            .filter_map(|id| self.widths.get(id).map(|w| (id.clone(), w.width)))
            .collect();

        if self.layout_mode == LayoutMode::Constrained && !entries.is_empty() {
            let sum: u32 = entries.iter().map(|&(_, w)| u32::from(w)).sum();
            let available = u32::from(self.available_width);
            if sum < available {
                let count = entries.len() as u32;
                let surplus = available - sum;
                let share = surplus / count;
                let remainder = (surplus % count) as usize;
                for (i, (_, width)) in entries.iter_mut().enumerate() {
                    let extra = share + u32::from(i < remainder);
                    // sum < available <= u16::MAX, so every width fits
                    *width = (u32::from(*width) + extra) as u16;
                }
            }
        }

        ResolvedWidths { entries }
    }
}

#[cfg(test)]
#[path = "width_tests.rs"]
mod tests;
