//! Screen layout: the table above a one-line status bar.

use super::constants::{SORT_ASCENDING_GLYPH, SORT_DESCENDING_GLYPH, STATUS_BAR_HEIGHT};
use super::styles::TableTheme;
use super::table::render_table;
use crate::model::SortOrder;
use crate::state::AppState;
use crate::view_state::TableLayout;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Key hints shown at the end of the status bar.
const KEY_HINTS: &str = "q: quit | s: sort | space: select | </>: resize | r: layout | m: mode";

/// Split the frame into the table area and the status bar area.
pub fn split_frame(frame_area: Rect) -> (Rect, Rect) {
    let [table, status] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame_area);
    (table, status)
}

/// Table area of a frame, used to lay the table out before drawing.
pub fn table_area(frame_area: Rect) -> Rect {
    split_frame(frame_area).0
}

/// Render the whole screen.
pub fn render_layout<T: Clone + PartialEq>(
    frame: &mut Frame,
    state: &AppState<T>,
    layout: &TableLayout,
    theme: &TableTheme,
) {
    let (_, status_area) = split_frame(frame.area());
    render_table(frame.buffer_mut(), layout, state, theme);
    render_status_bar(frame, status_area, state);
}

/// One-line summary of the table state.
pub fn status_text<T: Clone + PartialEq>(state: &AppState<T>) -> String {
    let table = state.table();
    let sort = table.sort_state();
    let sort_text = match sort.order() {
        SortOrder::Ascending => format!("{} {SORT_ASCENDING_GLYPH}", sort.column_id()),
        SortOrder::Descending => format!("{} {SORT_DESCENDING_GLYPH}", sort.column_id()),
        SortOrder::None => "none".to_string(),
    };
    format!(
        " Sort: {} | Selected: {} ({}) | Layout: {} | {}",
        sort_text,
        table.selection().len(),
        table.selection_mode(),
        table.layout_mode(),
        KEY_HINTS
    )
}

fn render_status_bar<T: Clone + PartialEq>(frame: &mut Frame, area: Rect, state: &AppState<T>) {
    let style = Style::default().add_modifier(Modifier::DIM);
    let paragraph = Paragraph::new(Line::from(status_text(state))).style(style);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;
    use crate::table_state::{TableSettings, TableViewModel};

    fn state() -> AppState<u8> {
        let columns = vec![Column::new("v", "Value", |n: &u8| n.to_string())
            .with_comparator(|a: &u8, b: &u8| a.cmp(b))];
        let table =
            TableViewModel::new(columns, vec![3, 1, 2], TableSettings::default()).expect("valid");
        AppState::new(table, "Values")
    }

    #[test]
    fn split_reserves_status_line_at_bottom() {
        let (table, status) = split_frame(Rect::new(0, 0, 40, 12));
        assert_eq!(table, Rect::new(0, 0, 40, 11));
        assert_eq!(status, Rect::new(0, 11, 40, 1));
    }

    #[test]
    fn status_text_reports_unsorted_state() {
        let text = status_text(&state());
        assert!(text.contains("Sort: none"), "{text}");
        assert!(text.contains("Selected: 0 (SINGLE)"), "{text}");
        assert!(text.contains("Layout: UNCONSTRAINED"), "{text}");
    }

    #[test]
    fn status_text_reports_sort_and_selection() {
        let mut state = state();
        state.table_mut().header_click("v");
        state.table_mut().header_click("v");
        state.table_mut().row_click(0);
        let text = status_text(&state);
        assert!(text.contains("Sort: v ▼"), "{text}");
        assert!(text.contains("Selected: 1 (SINGLE)"), "{text}");
    }
}
