//! Application state.
//!
//! AppState wraps the table state container with the UI concerns around it:
//! which widget has focus, the text in the search box and field editor, the
//! row cursor, the help overlay and the status line.

use crate::model::RowId;
use crate::source::LoadOutcome;
use crate::state::{Action, Effect, InputLine, TableState};
use tracing::debug;

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusPane {
    /// Key bindings drive the table.
    #[default]
    Table,
    /// The search box is taking text input. Entered via `/`.
    Search,
    /// A row is being edited and the field editor takes text input.
    Editor,
}

/// Root UI state. Pure data, no I/O.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Dataset, selection, edit buffer, filter and page.
    pub table: TableState,

    /// Widget receiving keys.
    pub focus: FocusPane,

    /// Search box contents. Mirrors the table's draft query.
    pub search_input: InputLine,

    /// Text of the field currently being edited.
    pub edit_input: InputLine,

    /// Index of the field being edited, in the record's field order.
    pub edit_field: usize,

    /// Row cursor, as an index into the current page.
    pub cursor: usize,

    /// Help overlay is shown.
    pub help_visible: bool,

    /// One-line message for the status bar.
    pub status: Option<String>,

    /// Query to apply once the first load succeeds.
    pending_search: Option<String>,
}

impl AppState {
    /// Table focused, cursor on the first row.
    pub fn new(table: TableState) -> Self {
        Self {
            table,
            ..Self::default()
        }
    }

    /// Queue a search to run after the first successful load.
    pub fn with_initial_search(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.search_input.set(query.clone());
        self.pending_search = Some(query);
        self
    }

    /// Dispatch to the table and keep the UI consistent with the result.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        let effect = self.table.dispatch(action);
        self.clamp_cursor();
        if self.focus == FocusPane::Editor && self.table.editor().buffer().is_none() {
            self.focus = FocusPane::Table;
        }
        effect
    }

    fn clamp_cursor(&mut self) {
        let len = self.table.page_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Row under the cursor, if the page has any rows.
    pub fn cursor_row(&self) -> Option<RowId> {
        self.table.page_rows().get(self.cursor).map(|row| row.id)
    }

    /// Move the cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row, stopping at the page end.
    pub fn cursor_down(&mut self) {
        self.cursor += 1;
        self.clamp_cursor();
    }

    /// Set the status line message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    // ===== Search box =====

    /// Push the search box text into the table's draft query.
    pub fn sync_search_query(&mut self) -> Option<Effect> {
        let query = self.search_input.as_str().to_string();
        self.dispatch(Action::SetSearchQuery(query))
    }

    // ===== Field editor =====

    /// Start editing the row under the cursor and focus the first field.
    pub fn begin_edit_at_cursor(&mut self) -> Option<Effect> {
        let id = self.cursor_row()?;
        let effect = self.dispatch(Action::BeginEdit(id));
        if self.table.editor().is_editing(id) {
            self.focus = FocusPane::Editor;
            self.select_edit_field(0);
        }
        effect
    }

    /// Name of the field under the editor cursor.
    pub fn edit_field_name(&self) -> Option<&str> {
        self.table
            .editor()
            .buffer()?
            .draft()
            .field_names()
            .nth(self.edit_field)
    }

    fn edit_field_count(&self) -> usize {
        self.table
            .editor()
            .buffer()
            .map_or(0, |buffer| buffer.draft().len())
    }

    /// Move the editor to field `index` and load its current draft value.
    pub fn select_edit_field(&mut self, index: usize) {
        self.edit_field = index.min(self.edit_field_count().saturating_sub(1));
        let value = self
            .table
            .editor()
            .buffer()
            .and_then(|buffer| buffer.draft().iter().nth(self.edit_field))
            .map(|(_, value)| value.to_string())
            .unwrap_or_default();
        self.edit_input.set(value);
    }

    /// Cycle to the next (or previous) field, wrapping around.
    pub fn cycle_edit_field(&mut self, forward: bool) {
        let count = self.edit_field_count();
        if count == 0 {
            return;
        }
        let next = if forward {
            (self.edit_field + 1) % count
        } else {
            (self.edit_field + count - 1) % count
        };
        self.select_edit_field(next);
    }

    /// Push the editor text into the buffer for the current field.
    pub fn sync_edit_field(&mut self) -> Option<Effect> {
        let field = self.edit_field_name()?.to_string();
        let value = self.edit_input.as_str().to_string();
        self.dispatch(Action::ChangeEditField { field, value })
    }

    // ===== Loading =====

    /// Apply a finished background load.
    ///
    /// Outcomes of superseded requests are dropped without touching the
    /// status line.
    pub fn apply_load_outcome(&mut self, outcome: LoadOutcome) -> Option<Effect> {
        let LoadOutcome { request, result } = outcome;
        if !self.table.is_current(request) {
            debug!(%request, "Ignoring outcome of superseded request");
            return None;
        }

        match result {
            Ok(parsed) => {
                let count = parsed.records.len();
                let skipped = parsed.malformed.len();
                self.dispatch(Action::LoadData {
                    request,
                    records: parsed.records,
                });
                self.set_status(match skipped {
                    0 => format!("Loaded {count} records"),
                    n => format!("Loaded {count} records ({n} malformed skipped)"),
                });

                match self.pending_search.take() {
                    Some(query) => {
                        self.dispatch(Action::SetSearchQuery(query));
                        self.dispatch(Action::ApplySearch)
                    }
                    None => None,
                }
            }
            Err(e) => {
                let reason = e.to_string();
                self.set_status(format!("Load failed: {reason}"));
                self.dispatch(Action::LoadFailed { request, reason })
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
