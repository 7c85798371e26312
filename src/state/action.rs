//! Actions and effects of the table state container.

use crate::model::{Record, RequestId, RowId};
use crate::state::PageNav;

/// Every way the table state can change.
///
/// Row-targeted actions name rows by [`RowId`], so an action built against an
/// older view of the data either still hits the intended row or does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issue a new load request for the full collection.
    Reload,
    /// A load request completed with these records.
    LoadData {
        /// Request the records answer.
        request: RequestId,
        /// Full collection, in source order.
        records: Vec<Record>,
    },
    /// A load request failed; the dataset is left alone.
    LoadFailed {
        /// Request that failed.
        request: RequestId,
        /// Error text for the status bar.
        reason: String,
    },
    /// Navigate between pages.
    SetPage(PageNav),
    /// Toggle one row in the selection.
    ToggleSelect(RowId),
    /// Remove every selected row.
    BulkDelete,
    /// Update the draft search query. Does not filter.
    SetSearchQuery(String),
    /// Filter by the draft query and go to page 1.
    ApplySearch,
    /// Drop the filter, clear the draft and go to page 1.
    ClearSearch,
    /// Start editing a row.
    BeginEdit(RowId),
    /// Change one field of the row being edited.
    ChangeEditField {
        /// Field name; unknown names are ignored.
        field: String,
        /// New draft value.
        value: String,
    },
    /// Commit the edit buffer to the row.
    SaveEdit,
    /// Discard the edit buffer.
    CancelEdit,
    /// Remove one row.
    DeleteRow(RowId),
}

/// Work the shell has to perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full collection and report back under this request id.
    Fetch(RequestId),
}
