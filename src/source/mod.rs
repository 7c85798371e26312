//! Record sources.
//!
//! This module provides where the member collection comes from:
//! - Remote HTTP(S) endpoint (the default)
//! - Local JSON file with the same shape
//! - Background loader that runs fetches off the UI thread

use crate::model::error::InputError;
use std::path::PathBuf;
use std::time::Duration;

pub mod file;
pub mod loader;
pub mod remote;

pub use file::FileSource;
pub use loader::{load_records, LoadOutcome, Loader};
pub use remote::RemoteSource;

/// Unified source of the record collection.
///
/// Sum type enforces exactly one variant. Cloning is cheap; each background
/// fetch works on its own clone.
#[derive(Debug, Clone)]
pub enum RecordSource {
    /// GET against an HTTP(S) endpoint.
    Remote(RemoteSource),
    /// Read a JSON file from disk.
    File(FileSource),
}

impl RecordSource {
    /// Fetch the raw body of the full collection.
    ///
    /// Blocking. Callers on the UI thread go through [`Loader`].
    ///
    /// # Errors
    ///
    /// Returns `InputError` for transport, status and I/O failures.
    pub fn fetch(&self) -> Result<String, InputError> {
        match self {
            RecordSource::Remote(r) => r.fetch(),
            RecordSource::File(f) => f.read(),
        }
    }

    /// Human-readable location for the header bar and logs.
    pub fn describe(&self) -> String {
        match self {
            RecordSource::Remote(r) => r.url().to_string(),
            RecordSource::File(f) => f.path().display().to_string(),
        }
    }
}

/// Detect and create the appropriate source for a location string.
///
/// # Logic:
/// 1. `http://` or `https://` prefix: RemoteSource with the given timeout
/// 2. Anything else: FileSource, which must exist
///
/// # Errors
///
/// Returns `InputError::InvalidUrl` for unparsable URLs and
/// `InputError::FileNotFound` for missing files.
pub fn detect_record_source(location: &str, timeout: Duration) -> Result<RecordSource, InputError> {
    let trimmed = location.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(RecordSource::Remote(RemoteSource::new(trimmed, timeout)?))
    } else {
        Ok(RecordSource::File(FileSource::new(PathBuf::from(trimmed))?))
    }
}
