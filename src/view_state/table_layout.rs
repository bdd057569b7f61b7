//! Geometry of one rendered table frame.
//!
//! Columns live on a virtual horizontal axis starting at 0: each visible
//! column occupies its resolved width, followed by a one-cell gap that
//! holds the column divider and acts as the column's resize handle. The
//! horizontal scroll offset maps that axis onto the inner area of the
//! table. Rows are addressed by display index.

use crate::model::ColumnId;
use crate::table_state::TableViewModel;
use ratatui::layout::{Margin, Rect};

/// Lines taken by the header row and the separator under it.
pub const HEADER_LINES: u16 = 2;

/// Width of the gap after every column.
pub const COLUMN_GAP: u16 = 1;

/// Scroll position of the table viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableScroll {
    /// First display row shown.
    pub row_offset: usize,
    /// Cells of the virtual axis hidden to the left.
    pub col_offset: u32,
}

/// Horizontal placement of one visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpan {
    /// Column id.
    pub id: ColumnId,
    /// Start on the virtual axis.
    pub start: u32,
    /// Resolved display width.
    pub width: u16,
    /// Whether the gap after the column is a live resize handle.
    pub resizable: bool,
}

impl ColumnSpan {
    /// Virtual position of the gap cell after the column.
    pub fn gap(&self) -> u32 {
        self.start + u32::from(self.width)
    }
}

/// Computed geometry of a table frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Whole table area including the outline.
    pub area: Rect,
    /// Area inside the outline (equal to `area` when not outlined).
    pub inner: Rect,
    /// Body rows area, below the header and its separator.
    pub body: Rect,
    /// Visible columns in display order.
    pub spans: Vec<ColumnSpan>,
    /// Lines per body row: 1, or 2 when row dividers are drawn.
    pub row_stride: u16,
    /// Scroll position, clamped to the content.
    pub scroll: TableScroll,
    /// Total rows in the data set.
    pub row_count: usize,
}

impl TableLayout {
    /// Lay out `table` in `area`.
    ///
    /// Reports the width left for columns to the table as the measured
    /// viewport, then resolves column widths. `scroll` is clamped in place
    /// so that the content is not scrolled past its end and `cursor` (a
    /// display index) stays visible.
    pub fn compute<T: Clone + PartialEq>(
        area: Rect,
        table: &mut TableViewModel<T>,
        scroll: &mut TableScroll,
        cursor: Option<usize>,
    ) -> Self {
        let settings = table.settings();
        let inner = if settings.outlined {
            area.inner(Margin::new(1, 1))
        } else {
            area
        };
        let row_stride = if settings.show_row_dividers { 2 } else { 1 };

        let gaps = u16::try_from(table.visible_ids().len())
            .unwrap_or(u16::MAX)
            .saturating_mul(COLUMN_GAP);
        table.viewport_measured(inner.width.saturating_sub(gaps));

        let resizing = table.settings().features.resizing;
        let resizable: Vec<bool> = table
            .visible_columns()
            .map(|c| resizing && c.is_resizable())
            .collect();
        let mut spans = Vec::with_capacity(resizable.len());
        let mut start = 0u32;
        for ((id, width), resizable) in table.resolved_widths().iter().zip(resizable) {
            spans.push(ColumnSpan {
                id: id.clone(),
                start,
                width,
                resizable,
            });
            start += u32::from(width) + u32::from(COLUMN_GAP);
        }

        let body = Rect {
            y: inner.y.saturating_add(HEADER_LINES),
            height: inner.height.saturating_sub(HEADER_LINES),
            ..inner
        };

        let mut layout = Self {
            area,
            inner,
            body,
            spans,
            row_stride,
            scroll: *scroll,
            row_count: table.row_count(),
        };
        layout.clamp_scroll(cursor);
        *scroll = layout.scroll;
        layout
    }

    /// Width of the virtual axis (all columns and gaps).
    pub fn content_width(&self) -> u32 {
        self.spans.last().map_or(0, |s| s.gap() + u32::from(COLUMN_GAP))
    }

    /// Number of body rows that fit.
    pub fn rows_visible(&self) -> usize {
        usize::from(self.body.height.div_ceil(self.row_stride))
    }

    /// Display indices shown, top to bottom.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        let end = self
            .scroll
            .row_offset
            .saturating_add(self.rows_visible())
            .min(self.row_count);
        self.scroll.row_offset.min(end)..end
    }

    /// Screen column of virtual position `x`, if it is on screen.
    pub fn screen_x(&self, x: u32) -> Option<u16> {
        let offset = x.checked_sub(self.scroll.col_offset)?;
        let offset = u16::try_from(offset).ok()?;
        (offset < self.inner.width).then(|| self.inner.x + offset)
    }

    /// Virtual position of screen column `x`, if it is inside the table.
    pub fn virtual_x(&self, x: u16) -> Option<u32> {
        let offset = x.checked_sub(self.inner.x)?;
        (offset < self.inner.width).then(|| u32::from(offset) + self.scroll.col_offset)
    }

    /// Screen line of display row `index`, if it is on screen.
    pub fn row_y(&self, index: usize) -> Option<u16> {
        if !self.visible_rows().contains(&index) {
            return None;
        }
        let line = u16::try_from(index - self.scroll.row_offset).ok()? * self.row_stride;
        Some(self.body.y + line)
    }

    /// Screen line of the header row.
    pub fn header_y(&self) -> u16 {
        self.inner.y
    }

    fn clamp_scroll(&mut self, cursor: Option<usize>) {
        let max_col = self
            .content_width()
            .saturating_sub(u32::from(self.inner.width));
        self.scroll.col_offset = self.scroll.col_offset.min(max_col);

        let visible = self.rows_visible();
        if let Some(cursor) = cursor {
            if cursor < self.scroll.row_offset {
                self.scroll.row_offset = cursor;
            } else if visible > 0 && cursor >= self.scroll.row_offset + visible {
                self.scroll.row_offset = cursor + 1 - visible;
            }
        }
        let max_row = self.row_count.saturating_sub(visible);
        self.scroll.row_offset = self.scroll.row_offset.min(max_row);
    }
}
