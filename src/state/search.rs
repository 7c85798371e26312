//! Search filter.
//!
//! A filter is applied explicitly and never discards rows: the unfiltered
//! dataset stays in the state and the filter only decides which rows are
//! visible.

use crate::model::Record;

/// An applied search. Matching is case-insensitive substring over every value.
///
/// Unlike an input buffer, an empty query is a valid filter: it keeps every
/// record that has at least one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
    needle: String,
}

impl SearchFilter {
    /// Filter for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let needle = query.to_lowercase();
        Self { query, needle }
    }

    /// Query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether `record` passes the filter.
    pub fn matches(&self, record: &Record) -> bool {
        record.matches_lowercase(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_any_field_ignoring_case() {
        let record = Record::from_pairs([("name", "Aaron Miles"), ("role", "Admin")]);
        assert!(SearchFilter::new("MILES").matches(&record));
        assert!(SearchFilter::new("admin").matches(&record));
        assert!(!SearchFilter::new("owner").matches(&record));
    }

    #[test]
    fn filter_keeps_original_query_text() {
        assert_eq!(SearchFilter::new("Aaron").query(), "Aaron");
    }
}
