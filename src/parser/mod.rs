//! JSON parser for member collections.
//!
//! Pure functions converting a response body into [`Record`]s. The body must be
//! a JSON array of flat objects; anything else in an item makes that item
//! malformed, and malformed items are reported alongside the good ones.

use crate::model::{ParseError, Record};
use serde_json::{Map, Number, Value};

/// Result of parsing one body: the usable records and the per-item failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    /// Records in source order.
    pub records: Vec<Record>,
    /// One entry per skipped item.
    pub malformed: Vec<ParseError>,
}

/// Parse a JSON array of flat objects.
///
/// Scalar values are stringified: strings as-is, numbers and booleans via
/// their JSON text, `null` as the empty string.
///
/// # Errors
///
/// `InvalidJson` if the body does not parse, `NotAnArray` if the top level
/// is not an array. Per-item problems land in [`ParsedRecords::malformed`].
pub fn parse_records(body: &str) -> Result<ParsedRecords, ParseError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ParseError::NotAnArray {
                found: json_type_name(&other),
            })
        }
    };

    let mut parsed = ParsedRecords::default();
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => match parse_object(index, map) {
                Ok(record) => parsed.records.push(record),
                Err(err) => parsed.malformed.push(err),
            },
            _ => parsed.malformed.push(ParseError::NotAnObject { index }),
        }
    }

    Ok(parsed)
}

fn parse_object(index: usize, map: Map<String, Value>) -> Result<Record, ParseError> {
    let mut record = Record::new();
    for (field, value) in map {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => number_text(&n),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ParseError::NestedValue { index, field });
            }
        };
        record.insert(field, text);
    }
    Ok(record)
}

/// Integral floats drop the fraction: `1.0` reads as `1`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
