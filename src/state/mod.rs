//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! [`TableState`] is the explicit container for the member table; it changes
//! only through [`Action`]s and asks the shell for I/O through [`Effect`]s.

pub mod action;
pub mod app_state;
pub mod editor;
pub mod input_line;
pub mod key_handler;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod table;

// Re-export for convenience
pub use action::{Action, Effect};
pub use app_state::{AppState, FocusPane};
pub use editor::{EditBuffer, EditState};
pub use input_line::InputLine;
pub use key_handler::{handle_key, KeyOutcome};
pub use pagination::{total_pages, PageNav, PageState, PAGE_SIZE};
pub use search::SearchFilter;
pub use selection::Selection;
pub use table::{TableState, VisibleRow};
