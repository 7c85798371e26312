//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Text entry in the search box and the row editor bypasses this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the cursor to the previous row on the page. Default: k/↑
    CursorUp,
    /// Move the cursor to the next row on the page. Default: j/↓
    CursorDown,

    // Pagination
    /// Jump to page 1. Default: g/Home
    FirstPage,
    /// Go back one page. Default: h/←/Page Up
    PreviousPage,
    /// Go forward one page. Default: l/→/Page Down
    NextPage,
    /// Jump to the last page. Default: G/End
    LastPage,

    // Selection
    /// Toggle the row under the cursor in the selection. Default: Space
    ToggleSelect,
    /// Delete every selected row. Default: D
    DeleteSelected,

    // Row actions
    /// Start editing the row under the cursor. Default: e/Enter
    EditRow,
    /// Delete the row under the cursor. Default: x/Delete
    DeleteRow,

    // Search
    /// Focus the search box. Default: /
    StartSearch,
    /// Drop the active filter and show every row again. Default: c
    ClearSearch,

    // Application
    /// Fetch the collection again. Default: r
    Reload,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
