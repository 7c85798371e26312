//! File-based record source.
//!
//! Reads a JSON file with the same shape as the remote endpoint. The file is
//! re-read on every fetch, so reloads pick up changes on disk.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Local JSON file holding the record collection.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for an existing file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the path does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, InputError> {
        let path = path.into();
        if !path.exists() {
            return Err(InputError::FileNotFound { path });
        }
        Ok(Self { path })
    }

    /// Path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file vanished since
    /// construction, `InputError::Io` for other read failures.
    pub fn read(&self) -> Result<String, InputError> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InputError::FileNotFound {
                path: self.path.clone(),
            },
            _ => InputError::Io(e),
        })
    }
}
