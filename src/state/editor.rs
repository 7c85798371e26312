//! Row editor state machine.
//!
//! EditState is a sum type: either viewing, or editing exactly one row with a
//! buffered copy of its fields. Transitions are pure functions over the state.

use crate::model::{Record, RowId};
use tracing::debug;

/// Scratch copy of one row while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    row: RowId,
    draft: Record,
}

impl EditBuffer {
    /// Start a buffer from the row's current fields.
    pub fn new(row: RowId, snapshot: &Record) -> Self {
        Self {
            row,
            draft: snapshot.clone(),
        }
    }

    /// Row being edited.
    pub fn row(&self) -> RowId {
        self.row
    }

    /// Fields as edited so far.
    pub fn draft(&self) -> &Record {
        &self.draft
    }

    /// Update one field. Unknown fields are ignored; returns whether applied.
    pub fn change(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.draft.set(field, value)
    }

    /// The draft, to overwrite the row with.
    pub fn into_record(self) -> Record {
        self.draft
    }
}

/// Viewing (default) or editing one row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No row is being edited.
    #[default]
    Viewing,
    /// Editing the buffer's row.
    Editing(EditBuffer),
}

impl EditState {
    /// Row being edited, if any.
    pub fn editing_row(&self) -> Option<RowId> {
        match self {
            EditState::Viewing => None,
            EditState::Editing(buffer) => Some(buffer.row()),
        }
    }

    /// Active buffer, if any.
    pub fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            EditState::Viewing => None,
            EditState::Editing(buffer) => Some(buffer),
        }
    }

    /// Whether `id` is the row being edited.
    pub fn is_editing(&self, id: RowId) -> bool {
        self.editing_row() == Some(id)
    }
}

/// Enter edit mode for `row`, replacing any edit in progress.
pub fn begin_edit(state: EditState, row: RowId, snapshot: &Record) -> EditState {
    if let Some(previous) = state.editing_row() {
        debug!(%previous, %row, "Discarding unsaved edit");
    }
    EditState::Editing(EditBuffer::new(row, snapshot))
}

/// Apply a field change to the buffer. No-op when viewing.
pub fn change_field(state: EditState, field: &str, value: String) -> EditState {
    match state {
        EditState::Editing(mut buffer) => {
            buffer.change(field, value);
            EditState::Editing(buffer)
        }
        viewing => viewing,
    }
}

/// Leave edit mode, handing back the buffer to commit (if any).
pub fn finish_edit(state: EditState) -> (EditState, Option<EditBuffer>) {
    match state {
        EditState::Editing(buffer) => (EditState::Viewing, Some(buffer)),
        viewing => (viewing, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Record {
        Record::from_pairs([("name", "Aaron"), ("role", "member")])
    }

    #[test]
    fn begin_edit_buffers_copy_of_row() {
        let state = begin_edit(EditState::Viewing, RowId::new(1), &member());
        let buffer = state.buffer().unwrap();
        assert_eq!(buffer.row(), RowId::new(1));
        assert_eq!(buffer.draft(), &member());
    }

    #[test]
    fn begin_edit_replaces_active_edit() {
        let state = begin_edit(EditState::Viewing, RowId::new(1), &member());
        let state = change_field(state, "name", "Changed".to_string());
        let state = begin_edit(state, RowId::new(2), &member());
        assert_eq!(state.editing_row(), Some(RowId::new(2)));
        assert_eq!(state.buffer().unwrap().draft().get("name"), Some("Aaron"));
    }

    #[test]
    fn change_field_ignores_unknown_fields() {
        let state = begin_edit(EditState::Viewing, RowId::new(1), &member());
        let state = change_field(state, "phone", "555".to_string());
        assert_eq!(state.buffer().unwrap().draft(), &member());
    }

    #[test]
    fn change_field_is_noop_when_viewing() {
        let state = change_field(EditState::Viewing, "name", "x".to_string());
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn finish_edit_returns_buffer() {
        let state = begin_edit(EditState::Viewing, RowId::new(3), &member());
        let (state, buffer) = finish_edit(state);
        assert_eq!(state, EditState::Viewing);
        assert_eq!(buffer.unwrap().row(), RowId::new(3));

        let (state, buffer) = finish_edit(EditState::Viewing);
        assert_eq!(state, EditState::Viewing);
        assert!(buffer.is_none());
    }
}
