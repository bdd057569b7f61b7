//! Domain-level keyboard actions independent of key bindings.

/// Actions the sample application performs on its table.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor up. Default: k/↑
    CursorUp,
    /// Move the row cursor down. Default: j/↓
    CursorDown,
    /// Move the row cursor up a page. Default: PageUp
    PageUp,
    /// Move the row cursor down a page. Default: PageDown
    PageDown,
    /// Jump to the first row. Default: g/Home
    CursorFirst,
    /// Jump to the last row. Default: G/End
    CursorLast,

    // Selection
    /// Select or deselect the row under the cursor. Default: Space/Enter
    ToggleRowSelection,
    /// Select every row (multiple mode only). Default: a
    SelectAll,
    /// Drop the selection. Default: Esc
    ClearSelection,
    /// Switch between single and multiple selection. Default: m
    ToggleSelectionMode,

    // Columns
    /// Focus the next visible column. Default: Tab
    NextColumn,
    /// Focus the previous visible column. Default: Shift+Tab
    PrevColumn,
    /// Cycle the sort of the focused column. Default: s
    SortFocusedColumn,
    /// Grow the focused column by one cell. Default: >
    WidenColumn,
    /// Shrink the focused column by one cell. Default: <
    NarrowColumn,
    /// Hide the focused column. Default: v
    HideColumn,
    /// Show every column again. Default: V
    ShowAllColumns,
    /// Switch between unconstrained and constrained layout. Default: r
    ToggleLayoutMode,

    // Viewport
    /// Scroll the table left. Default: h/←
    ScrollLeft,
    /// Scroll the table right. Default: l/→
    ScrollRight,

    // Appearance
    /// Show or hide the outline around the table. Default: o
    ToggleOutline,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
