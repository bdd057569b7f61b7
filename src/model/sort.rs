//! Sort order and the single per-table sort state.

use super::identifiers::ColumnId;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Rows shown in insertion order.
    #[default]
    None,
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// The one active sort of a table.
///
/// Replaced, never mutated, on every header activation. An unsorted state
/// always carries the empty column id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    column_id: ColumnId,
    order: SortOrder,
}

impl SortState {
    /// The `{"", NONE}` state a table starts in.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by `column_id` in `order`.
    ///
    /// `SortOrder::None` normalizes to [`SortState::unsorted`].
    pub fn new(column_id: impl Into<ColumnId>, order: SortOrder) -> Self {
        match order {
            SortOrder::None => Self::unsorted(),
            order => Self {
                column_id: column_id.into(),
                order,
            },
        }
    }

    /// Active column id (empty when unsorted).
    pub fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Active order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// True unless the order is `None`.
    pub fn is_sorted(&self) -> bool {
        self.order != SortOrder::None
    }

    /// Order shown for `column_id`: the active order for the active column,
    /// `None` for every other column.
    pub fn order_for(&self, column_id: &str) -> SortOrder {
        if self.is_sorted() && self.column_id.as_str() == column_id {
            self.order
        } else {
            SortOrder::None
        }
    }

    /// State after one activation of `column_id`'s header.
    ///
    /// A different column starts ascending; the same column goes
    /// ascending → descending → unsorted.
    pub fn toggled(&self, column_id: &ColumnId) -> Self {
        if &self.column_id != column_id || !self.is_sorted() {
            return Self::new(column_id.clone(), SortOrder::Ascending);
        }
        match self.order {
            SortOrder::Ascending => Self::new(column_id.clone(), SortOrder::Descending),
            SortOrder::Descending | SortOrder::None => Self::unsorted(),
        }
    }
}
