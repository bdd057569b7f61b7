//! Table rendering.
//!
//! Draws one frame of a table into a buffer from a precomputed
//! [`TableLayout`]. Cell content is placed on the layout's virtual axis and
//! clipped to the inner area, so horizontally scrolled columns render
//! partially.

use super::constants::{
    COLUMN_DIVIDER, EMPTY_TABLE_MESSAGE, HEADER_SEPARATOR, HEADER_SEPARATOR_JUNCTION,
    ROW_DIVIDER, SORT_ASCENDING_GLYPH, SORT_DESCENDING_GLYPH, THICK_COLUMN_DIVIDER,
    THICK_ROW_DIVIDER,
};
use super::styles::{border_type, TableTheme};
use crate::model::SortOrder;
use crate::state::AppState;
use crate::view_state::{ColumnSpan, TableLayout};
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Widget};
use unicode_width::UnicodeWidthChar;

/// Render the table of `state` into `buf`.
pub fn render_table<T: Clone + PartialEq>(
    buf: &mut Buffer,
    layout: &TableLayout,
    state: &AppState<T>,
    theme: &TableTheme,
) {
    let table = state.table();
    let settings = table.settings();

    if settings.outlined {
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type(settings))
            .border_style(theme.border(settings))
            .title(format!(" {} ", state.title))
            .render(layout.area, buf);
    }
    if layout.inner.is_empty() {
        return;
    }

    let thick = settings.divider_thickness > 1.0;
    let column_divider = if thick { THICK_COLUMN_DIVIDER } else { COLUMN_DIVIDER };
    let row_divider = if thick { THICK_ROW_DIVIDER } else { ROW_DIVIDER };
    let show_column_dividers = settings.show_column_dividers;

    // ===== Header =====

    let header_y = layout.header_y();
    let sort = table.sort_state();
    for span in &layout.spans {
        let focused = state.focused_column.as_ref() == Some(&span.id);
        let style = theme.header(focused);
        let mut title = table
            .column(span.id.as_str())
            .map(|c| c.title().to_string())
            .unwrap_or_default();
        if sort.column_id() == &span.id {
            match sort.order() {
                SortOrder::Ascending => title = format!("{title} {SORT_ASCENDING_GLYPH}"),
                SortOrder::Descending => title = format!("{title} {SORT_DESCENDING_GLYPH}"),
                SortOrder::None => {}
            }
        }
        fill(buf, layout, span.start, span.width, header_y, style);
        put_line(buf, layout, span, header_y, &Line::from(title), style);
    }

    // Header separator
    let separator_y = header_y + 1;
    if separator_y < layout.inner.bottom() {
        draw_rule(buf, layout, separator_y, HEADER_SEPARATOR, theme.divider());
        if show_column_dividers {
            for span in &layout.spans {
                put_symbol(
                    buf,
                    layout,
                    span.gap(),
                    separator_y,
                    HEADER_SEPARATOR_JUNCTION,
                    theme.divider(),
                );
            }
        }
    }

    // ===== Body =====

    if layout.row_count == 0 {
        if layout.body.height > 0 {
            buf.set_stringn(
                layout.body.x,
                layout.body.y,
                EMPTY_TABLE_MESSAGE,
                usize::from(layout.body.width),
                theme.divider(),
            );
        }
        return;
    }

    let highlighted = table.selection_highlight_set();
    let hovered = table.hovered_index();
    let mut last_line = header_y;
    for index in layout.visible_rows() {
        let (Some(y), Some(row)) = (layout.row_y(index), table.row_at(index)) else {
            continue;
        };
        let row_style = theme.row(
            index,
            hovered == Some(index),
            highlighted.contains(&index),
            state.cursor == Some(index),
        );
        fill(
            buf,
            layout,
            0,
            u16::try_from(layout.content_width()).unwrap_or(u16::MAX),
            y,
            row_style,
        );
        for span in &layout.spans {
            if let Some(column) = table.column(span.id.as_str()) {
                put_line(buf, layout, span, y, &column.render_cell(row), row_style);
            }
        }
        last_line = y;

        let divider_y = y + 1;
        let more_rows = index + 1 < layout.row_count;
        if layout.row_stride > 1 && more_rows && divider_y < layout.body.bottom() {
            draw_rule(buf, layout, divider_y, row_divider, theme.divider());
            last_line = divider_y;
        }
    }

    // Header gaps always separate titles; body gaps only with dividers on
    for span in &layout.spans {
        put_symbol(buf, layout, span.gap(), header_y, column_divider, theme.divider());
        if show_column_dividers {
            for y in layout.body.y..=last_line {
                put_symbol(buf, layout, span.gap(), y, column_divider, theme.divider());
            }
        }
    }
}

/// Write `line` into the cells of `span` on screen line `y`, clipped to the
/// span and to the inner area. Span styles are patched over `base`.
fn put_line(
    buf: &mut Buffer,
    layout: &TableLayout,
    span: &ColumnSpan,
    y: u16,
    line: &Line<'_>,
    base: Style,
) {
    let end = span.gap();
    let mut x = span.start;
    for part in &line.spans {
        let style = base.patch(line.style).patch(part.style);
        for ch in part.content.chars() {
            let width = ch.width().unwrap_or(0) as u32;
            if width == 0 {
                continue;
            }
            if x + width > end {
                return;
            }
            // Skip wide glyphs cut by the left edge
            if let (Some(sx), Some(_)) = (layout.screen_x(x), layout.screen_x(x + width - 1)) {
                let mut utf8 = [0u8; 4];
                buf.set_stringn(sx, y, ch.encode_utf8(&mut utf8), width as usize, style);
            }
            x += width;
        }
    }
}

/// Apply `style` to `width` cells starting at virtual position `start`.
fn fill(buf: &mut Buffer, layout: &TableLayout, start: u32, width: u16, y: u16, style: Style) {
    for vx in start..start + u32::from(width) {
        if let Some(sx) = layout.screen_x(vx) {
            if let Some(cell) = buf.cell_mut((sx, y)) {
                cell.set_style(style);
            }
        }
    }
}

/// Draw `symbol` across the content width on line `y`.
fn draw_rule(buf: &mut Buffer, layout: &TableLayout, y: u16, symbol: &str, style: Style) {
    for vx in 0..layout.content_width() {
        put_symbol(buf, layout, vx, y, symbol, style);
    }
}

/// Draw a one-cell `symbol` at virtual position `x` if it is on screen.
fn put_symbol(buf: &mut Buffer, layout: &TableLayout, x: u32, y: u16, symbol: &str, style: Style) {
    if let Some(sx) = layout.screen_x(x) {
        if let Some(cell) = buf.cell_mut((sx, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
