//! Row selection for bulk actions.

use crate::model::RowId;
use std::collections::BTreeSet;

/// Set of checked rows, keyed by stable id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rows: BTreeSet<RowId>,
}

impl Selection {
    /// Toggle membership. Returns `true` if the row is now selected.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.rows.remove(&id) {
            false
        } else {
            self.rows.insert(id);
            true
        }
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains(&id)
    }

    /// Unselect `id`.
    pub fn remove(&mut self, id: RowId) {
        self.rows.remove(&id);
    }

    /// Unselect everything.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.iter().copied()
    }
}
