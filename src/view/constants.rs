//! Layout dimension constants for TUI rendering.

/// Height of the header line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search bar (border + input line).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the pagination bar.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the "Delete Selected" control next to the search box.
pub const DELETE_SELECTED_WIDTH: u16 = 21;

/// Width of the Select column (`[x]` plus padding).
pub const SELECT_COLUMN_WIDTH: u16 = 6;

/// Width of the Actions column; fits `Save Cancel` and `Edit Delete`.
pub const ACTIONS_COLUMN_WIDTH: u16 = 12;

/// Field columns never grow beyond this many cells.
pub const MAX_FIELD_COLUMN_WIDTH: u16 = 40;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
