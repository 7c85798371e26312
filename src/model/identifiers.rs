//! Core identifier newtypes.
//!
//! Rows and load requests are addressed by opaque sequence numbers rather than
//! positions, so deletes and filters never invalidate a stored identifier.

use std::fmt;

/// Stable identifier of a row within one [`TableState`](crate::state::TableState).
///
/// Assigned when a load is applied. Identifiers are never reused while the
/// state lives, so a stale id simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u64);

impl RowId {
    /// Wrap a raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// Sequence number of a load request.
///
/// Only the most recently issued request is allowed to apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Wrap a raw sequence number.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id issued after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_next_increments() {
        let first = RequestId::new(1);
        assert_eq!(first.next(), RequestId::new(2));
        assert!(first.next() > first);
    }

    #[test]
    fn row_id_display_is_prefixed() {
        assert_eq!(RowId::new(7).to_string(), "row#7");
    }

    #[test]
    fn row_ids_order_by_raw_value() {
        assert!(RowId::new(3) < RowId::new(10));
    }
}
