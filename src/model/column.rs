//! Column definitions supplied by the embedding application.
//!
//! A column is capability based: every column carries a value extractor, and
//! may additionally provide a comparator (overriding the string ordering of
//! extracted values) and a cell renderer (overriding the plain extracted text).

use super::identifiers::ColumnId;
use ratatui::text::Line;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Width used when a column does not declare one.
pub const DEFAULT_COLUMN_WIDTH: u16 = 12;

/// Minimum width used when a column does not declare one.
pub const DEFAULT_MIN_COLUMN_WIDTH: u16 = 3;

/// Extracts the display/sort text of a cell from a row.
pub type ValueExtractor<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Orders two rows for a column.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Renders a cell of a row into styled text.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> Line<'static> + Send + Sync>;

/// Immutable description of one table column over rows of type `T`.
pub struct Column<T> {
    id: ColumnId,
    title: String,
    sortable: bool,
    resizable: bool,
    visible: bool,
    width: u16,
    min_width: u16,
    max_width: u16,
    value_extractor: ValueExtractor<T>,
    comparator: Option<Comparator<T>>,
    renderer: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a sortable, resizable, visible column.
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        value_extractor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: true,
            resizable: true,
            visible: true,
            width: DEFAULT_COLUMN_WIDTH,
            min_width: DEFAULT_MIN_COLUMN_WIDTH,
            max_width: u16::MAX,
            value_extractor: Arc::new(value_extractor),
            comparator: None,
            renderer: None,
        }
    }

    /// Set the declared (initial) width.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the lower resize bound.
    pub fn with_min_width(mut self, min_width: u16) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the upper resize bound.
    pub fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }

    /// Allow or forbid sorting by this column.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Allow or forbid resizing this column.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Show or hide this column.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Replace the default string ordering with an explicit comparator.
    pub fn with_comparator(
        mut self,
        comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Replace the default plain-text cell with a custom renderer.
    pub fn with_renderer(
        mut self,
        renderer: impl Fn(&T) -> Line<'static> + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Column id.
    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether header activation may sort by this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Whether the width may be changed by dragging.
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// Whether the column is rendered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Lower width bound.
    pub fn min_width(&self) -> u16 {
        self.min_width
    }

    /// Upper width bound, never below [`Column::min_width`].
    pub fn max_width(&self) -> u16 {
        self.max_width.max(self.min_width)
    }

    /// Declared width clamped into `[min_width, max_width]`.
    pub fn width(&self) -> u16 {
        self.width.clamp(self.min_width(), self.max_width())
    }

    /// Extracted text of this column's cell in `row`.
    pub fn extract(&self, row: &T) -> String {
        (self.value_extractor)(row)
    }

    /// Explicit comparator, if the column provides one.
    pub fn comparator(&self) -> Option<&Comparator<T>> {
        self.comparator.as_ref()
    }

    /// Ascending order of two rows under this column.
    ///
    /// Without an explicit comparator the extracted strings are compared
    /// lexicographically, so `"10"` sorts before `"2"`.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.comparator {
            Some(comparator) => comparator(a, b),
            None => self.extract(a).cmp(&self.extract(b)),
        }
    }

    /// Styled cell content for `row`.
    pub fn render_cell(&self, row: &T) -> Line<'static> {
        match &self.renderer {
            Some(renderer) => renderer(row),
            None => Line::from(self.extract(row)),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            resizable: self.resizable,
            visible: self.visible,
            width: self.width,
            min_width: self.min_width,
            max_width: self.max_width,
            value_extractor: Arc::clone(&self.value_extractor),
            comparator: self.comparator.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("resizable", &self.resizable)
            .field("visible", &self.visible)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("comparator", &self.comparator.is_some())
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        score: u32,
    }

    fn score_column() -> Column<Row> {
        Column::new("score", "Score", |r: &Row| r.score.to_string())
    }

    #[test]
    fn new_column_has_permissive_defaults() {
        let col = score_column();
        assert_eq!(col.id().as_str(), "score");
        assert_eq!(col.title(), "Score");
        assert!(col.is_sortable());
        assert!(col.is_resizable());
        assert!(col.is_visible());
        assert_eq!(col.width(), DEFAULT_COLUMN_WIDTH);
        assert_eq!(col.min_width(), DEFAULT_MIN_COLUMN_WIDTH);
        assert_eq!(col.max_width(), u16::MAX);
    }

    #[test]
    fn declared_width_is_clamped_into_bounds() {
        let col = score_column()
            .with_min_width(50)
            .with_max_width(300)
            .with_width(1000);
        assert_eq!(col.width(), 300);

        let col = col.with_width(10);
        assert_eq!(col.width(), 50);
    }

    #[test]
    fn max_width_below_min_width_collapses_to_min() {
        let col = score_column().with_min_width(40).with_max_width(20);
        assert_eq!(col.max_width(), 40);
        assert_eq!(col.width(), 40);
    }

    #[test]
    fn default_compare_is_lexicographic_on_extracted_text() {
        let col = score_column();
        let ten = Row { name: "a", score: 10 };
        let two = Row { name: "b", score: 2 };
        assert_eq!(col.compare(&ten, &two), Ordering::Less);
    }

    #[test]
    fn explicit_comparator_overrides_string_ordering() {
        let col = score_column().with_comparator(|a: &Row, b: &Row| a.score.cmp(&b.score));
        let ten = Row { name: "a", score: 10 };
        let two = Row { name: "b", score: 2 };
        assert_eq!(col.compare(&ten, &two), Ordering::Greater);
        assert!(col.comparator().is_some());
    }

    #[test]
    fn render_cell_defaults_to_extracted_text() {
        let col = Column::new("name", "Name", |r: &Row| r.name.to_string());
        let row = Row { name: "Lions", score: 3 };
        assert_eq!(col.render_cell(&row), Line::from("Lions"));
    }

    #[test]
    fn custom_renderer_is_used_when_present() {
        let col = Column::new("name", "Name", |r: &Row| r.name.to_string())
            .with_renderer(|r: &Row| Line::from(format!("* {}", r.name)));
        let row = Row { name: "Lions", score: 3 };
        assert_eq!(col.render_cell(&row), Line::from("* Lions"));
    }

    #[test]
    fn clone_shares_extractor() {
        let col = score_column().with_width(20);
        let cloned = col.clone();
        let row = Row { name: "x", score: 7 };
        assert_eq!(cloned.extract(&row), "7");
        assert_eq!(cloned.width(), 20);
    }
}
