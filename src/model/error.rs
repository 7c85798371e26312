//! Error types for roster.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Fetching the record collection failed (bad URL, network, HTTP status, IO)
//!   - [`ParseError`] - The response body is not a JSON array of flat objects
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Load failures are **non-fatal**: the dataset keeps whatever it held before, the error is
//! logged and shown in the status bar. Individual malformed records are skipped. Terminal
//! errors are fatal and propagate to the top-level handler.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Recovery Behavior
///
/// - **InputRead/Parse**: Non-fatal when raised by a background load - reported in the
///   status bar, dataset untouched
/// - **Terminal**: Fatal - propagate to main loop for graceful shutdown
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to fetch the record collection.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// The fetched body could not be interpreted as a record collection.
    #[error("Failed to parse records: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the TUI cannot function. The terminal is restored and
    /// the error printed to stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when fetching records from a URL or a file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified JSON file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use roster::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The configured endpoint is not a usable URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The endpoint as configured.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout, body read).
    ///
    /// `message` is the rendered `reqwest::Error`; the error itself is not kept so that
    /// the failure can cross the loader channel and be displayed later.
    #[error("Network error fetching {url}: {message}")]
    Network {
        /// The endpoint that was requested.
        url: String,
        /// Transport error description.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// The endpoint that was requested.
        url: String,
    },

    /// Generic I/O error reading a local source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing a fetched body into records.
///
/// `InvalidJson` and `NotAnArray` reject the whole body. `NotAnObject` and `NestedValue`
/// describe a single array item; that item is skipped and the rest are kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The body is not syntactically valid JSON.
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// The `serde_json` error message.
        message: String,
    },

    /// The top-level JSON value is not an array.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::model::error::ParseError;
    ///
    /// let err = ParseError::NotAnArray { found: "object" };
    /// assert!(err.to_string().contains("object"));
    /// ```
    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray {
        /// JSON type name of the value found instead.
        found: &'static str,
    },

    /// An array item is not a JSON object.
    #[error("Record {index} is not a JSON object")]
    NotAnObject {
        /// 0-based position in the source array.
        index: usize,
    },

    /// A field holds an array or object; records must be flat.
    #[error("Record {index} has a nested value in field '{field}'")]
    NestedValue {
        /// 0-based position in the source array.
        index: usize,
        /// The offending field name.
        field: String,
    },
}
