//! Table state container.
//!
//! TableState owns the dataset, selection, edit buffer, search filter and page.
//! It changes only through [`TableState::dispatch`], which is deterministic and
//! performs no I/O; fetches are requested by returning [`Effect::Fetch`].

use crate::model::{Record, RequestId, Row, RowId};
use crate::state::editor::{self, EditState};
use crate::state::pagination::{self, PageState};
use crate::state::{Action, Effect, SearchFilter, Selection};
use tracing::{debug, info, warn};

/// One row of the current page, projected for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// Stable row id.
    pub id: RowId,
    /// Position within the visible (filtered) dataset.
    pub index: usize,
    /// Row fields.
    pub record: &'a Record,
    /// Row is in the selection; rendered as a highlight.
    pub selected: bool,
    /// Row is the one being edited.
    pub editing: bool,
}

/// Explicit state container for the member table.
#[derive(Debug, Clone)]
pub struct TableState {
    rows: Vec<Row>,
    next_row: u64,
    filter: Option<SearchFilter>,
    query: String,
    selection: Selection,
    editor: EditState,
    page: PageState,
    next_request: RequestId,
    latest_request: Option<RequestId>,
    in_flight: Option<RequestId>,
    last_error: Option<String>,
    refetch_on_page_change: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TableState {
    /// Empty state. `refetch_on_page_change` controls whether page changes
    /// request a fresh load.
    pub fn new(refetch_on_page_change: bool) -> Self {
        Self {
            rows: Vec::new(),
            next_row: 0,
            filter: None,
            query: String::new(),
            selection: Selection::default(),
            editor: EditState::Viewing,
            page: PageState::default(),
            next_request: RequestId::new(1),
            latest_request: None,
            in_flight: None,
            last_error: None,
            refetch_on_page_change,
        }
    }

    /// State pre-populated with records, without going through a request.
    pub fn with_records(refetch_on_page_change: bool, records: Vec<Record>) -> Self {
        let mut state = Self::new(refetch_on_page_change);
        state.replace_rows(records);
        state
    }

    // ===== Transitions =====

    /// Apply one action. Returns the effect the shell must run, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Reload => Some(self.issue_request()),
            Action::LoadData { request, records } => {
                self.load_data(request, records);
                None
            }
            Action::LoadFailed { request, reason } => {
                self.load_failed(request, reason);
                None
            }
            Action::SetPage(nav) => {
                let target = self.page.resolve(nav, self.visible_len())?;
                self.set_page(target)
            }
            Action::ToggleSelect(id) => {
                if self.row(id).is_some() {
                    self.selection.toggle(id);
                } else {
                    debug!(%id, "Ignoring selection of unknown row");
                }
                None
            }
            Action::BulkDelete => {
                self.bulk_delete();
                None
            }
            Action::SetSearchQuery(query) => {
                self.query = query;
                None
            }
            Action::ApplySearch => self.apply_search(),
            Action::ClearSearch => {
                self.filter = None;
                self.query.clear();
                self.set_page(1)
            }
            Action::BeginEdit(id) => {
                match self.row(id) {
                    Some(row) => {
                        let snapshot = row.record.clone();
                        self.editor = editor::begin_edit(std::mem::take(&mut self.editor), id, &snapshot);
                    }
                    None => debug!(%id, "Ignoring edit of unknown row"),
                }
                None
            }
            Action::ChangeEditField { field, value } => {
                self.editor = editor::change_field(std::mem::take(&mut self.editor), &field, value);
                None
            }
            Action::SaveEdit => {
                self.save_edit();
                None
            }
            Action::CancelEdit => {
                let (state, _discarded) = editor::finish_edit(std::mem::take(&mut self.editor));
                self.editor = state;
                None
            }
            Action::DeleteRow(id) => {
                self.delete_row(id);
                None
            }
        }
    }

    fn issue_request(&mut self) -> Effect {
        let request = self.next_request;
        self.next_request = request.next();
        self.latest_request = Some(request);
        self.in_flight = Some(request);
        debug!(%request, "Issued load request");
        Effect::Fetch(request)
    }

    /// Whether an outcome for `request` would still be applied.
    pub fn is_current(&self, request: RequestId) -> bool {
        self.latest_request == Some(request)
    }

    fn set_page(&mut self, page: usize) -> Option<Effect> {
        if self.page.set(page) && self.refetch_on_page_change {
            Some(self.issue_request())
        } else {
            None
        }
    }

    fn load_data(&mut self, request: RequestId, records: Vec<Record>) {
        if !self.is_current(request) {
            debug!(%request, "Dropping stale load result");
            return;
        }
        info!(%request, count = records.len(), "Applying loaded records");
        self.in_flight = None;
        self.last_error = None;
        self.replace_rows(records);
    }

    fn load_failed(&mut self, request: RequestId, reason: String) {
        if !self.is_current(request) {
            debug!(%request, "Dropping stale load failure");
            return;
        }
        warn!(%request, "Load failed: {}", reason);
        self.in_flight = None;
        self.last_error = Some(reason);
    }

    fn replace_rows(&mut self, records: Vec<Record>) {
        self.rows = records
            .into_iter()
            .map(|record| {
                let id = RowId::new(self.next_row);
                self.next_row += 1;
                Row { id, record }
            })
            .collect();
        self.selection.clear();
        self.editor = EditState::Viewing;
        self.page.clamp(self.visible_len());
    }

    fn apply_search(&mut self) -> Option<Effect> {
        let filter = SearchFilter::new(self.query.clone());
        debug!(query = filter.query(), "Applying search filter");
        self.filter = Some(filter);

        if let Some(editing) = self.editor.editing_row() {
            if !self.is_visible(editing) {
                self.editor = EditState::Viewing;
            }
        }

        self.set_page(1)
    }

    fn bulk_delete(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let before = self.rows.len();
        let selection = std::mem::take(&mut self.selection);
        self.rows.retain(|row| !selection.contains(row.id));
        info!(removed = before - self.rows.len(), "Deleted selected rows");

        if let Some(editing) = self.editor.editing_row() {
            if selection.contains(editing) {
                self.editor = EditState::Viewing;
            }
        }
        self.page.clamp(self.visible_len());
    }

    fn delete_row(&mut self, id: RowId) {
        if self.editor.is_editing(id) {
            warn!(%id, "Refusing to delete a row that is being edited");
            return;
        }
        let Some(pos) = self.rows.iter().position(|row| row.id == id) else {
            debug!(%id, "Ignoring delete of unknown row");
            return;
        };
        self.rows.remove(pos);
        self.selection.remove(id);
        self.page.clamp(self.visible_len());
    }

    fn save_edit(&mut self) {
        let (state, buffer) = editor::finish_edit(std::mem::take(&mut self.editor));
        self.editor = state;
        let Some(buffer) = buffer else {
            return;
        };
        let id = buffer.row();
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => row.record = buffer.into_record(),
            None => warn!(%id, "Edited row no longer exists; discarding edit"),
        }
        // The saved values may no longer match the filter.
        self.page.clamp(self.visible_len());
    }

    // ===== Queries =====

    /// Every row, ignoring the filter.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row with `id`, visible or not.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn is_visible(&self, id: RowId) -> bool {
        self.row(id)
            .is_some_and(|row| self.filter.as_ref().is_none_or(|f| f.matches(&row.record)))
    }

    /// Rows passing the active filter, in dataset order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .filter(|row| self.filter.as_ref().is_none_or(|f| f.matches(&row.record)))
    }

    /// Number of rows passing the filter.
    pub fn visible_len(&self) -> usize {
        self.visible_rows().count()
    }

    /// 1-based current page.
    pub fn page(&self) -> usize {
        self.page.page()
    }

    /// Pages over the visible rows; 0 when none.
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.visible_len())
    }

    /// First/Previous are enabled.
    pub fn can_go_back(&self) -> bool {
        self.page.can_go_back()
    }

    /// Next/Last are enabled.
    pub fn can_go_forward(&self) -> bool {
        self.page.can_go_forward(self.visible_len())
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<VisibleRow<'_>> {
        let range = self.page.slice_range(self.visible_len());
        let start = range.start;
        self.visible_rows()
            .skip(start)
            .take(range.len())
            .enumerate()
            .map(|(offset, row)| VisibleRow {
                id: row.id,
                index: start + offset,
                record: &row.record,
                selected: self.selection.contains(row.id),
                editing: self.editor.is_editing(row.id),
            })
            .collect()
    }

    /// Column headers, taken from the first record of the current page.
    pub fn headers(&self) -> Vec<String> {
        self.page_rows()
            .first()
            .map(|row| row.record.field_names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Rows checked for bulk delete.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The "Delete Selected" control is enabled.
    pub fn can_delete_selected(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Edit mode.
    pub fn editor(&self) -> &EditState {
        &self.editor
    }

    /// Applied search filter.
    pub fn filter(&self) -> Option<&SearchFilter> {
        self.filter.as_ref()
    }

    /// Draft query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// A request is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Reason the latest load failed, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Page changes trigger a fetch.
    pub fn refetch_on_page_change(&self) -> bool {
        self.refetch_on_page_change
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
