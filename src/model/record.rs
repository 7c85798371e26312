//! Member records.
//!
//! A record is a flat, ordered mapping from field name to string value. The
//! shape comes entirely from the source data; nothing is declared up front.

use crate::model::RowId;

/// One member entry.
///
/// Field order is the order in which fields appeared in the source object and
/// is what the table uses for its columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Record with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from `(field, value)` pairs.
    ///
    /// A repeated field keeps its first position and takes the last value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (field, value) in pairs {
            record.insert(field, value);
        }
        record
    }

    /// Value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Insert or overwrite a field. New fields are appended.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Overwrite an existing field. Returns `false` if the field is unknown.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Values in field order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    /// `(field, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Case-insensitive substring match against every value.
    ///
    /// `needle_lower` must already be lowercase. A record without fields never
    /// matches, not even the empty needle.
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        self.values()
            .any(|value| value.to_lowercase().contains(needle_lower))
    }
}

/// A record together with the stable id it was assigned on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Identity assigned on load.
    pub id: RowId,
    /// Current field values.
    pub record: Record,
}
