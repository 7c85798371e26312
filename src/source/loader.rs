//! Background record loading.
//!
//! Each fetch runs on its own thread and reports back over a channel that the
//! event loop drains on every tick. Outcomes carry the [`RequestId`] they were
//! issued under; deciding whether an outcome is stale is the state's job.

use crate::model::{AppError, RequestId};
use crate::parser::{self, ParsedRecords};
use crate::source::RecordSource;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

/// Result of one background fetch.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Request this outcome answers.
    pub request: RequestId,
    /// Parsed records, or why the load failed.
    pub result: Result<ParsedRecords, AppError>,
}

/// Fetch and parse the full collection synchronously.
///
/// # Errors
///
/// Returns `AppError::InputRead` for fetch failures and `AppError::Parse` when
/// the body is not an array of records.
pub fn load_records(source: &RecordSource) -> Result<ParsedRecords, AppError> {
    let body = source.fetch()?;
    let parsed = parser::parse_records(&body)?;
    for err in &parsed.malformed {
        warn!("Skipping malformed record: {}", err);
    }
    Ok(parsed)
}

/// Runs fetches off the UI thread.
///
/// Concurrent requests are allowed; every one of them completes and is
/// delivered.
pub struct Loader {
    source: RecordSource,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
}

impl Loader {
    /// Loader fetching from `source`.
    pub fn new(source: RecordSource) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Where records are fetched from.
    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    /// Start a background fetch tagged with `request`.
    pub fn spawn(&self, request: RequestId) {
        debug!(%request, source = %self.source.describe(), "Spawning load");

        let source = self.source.clone();
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("roster-load-{}", request.get()))
            .spawn(move || {
                let result = load_records(&source);
                // Receiver gone means the app is shutting down.
                let _ = tx.send(LoadOutcome { request, result });
            });

        if let Err(e) = spawned {
            warn!(%request, "Failed to spawn load thread: {}", e);
            let _ = self.tx.send(LoadOutcome {
                request,
                result: Err(AppError::Terminal(e)),
            });
        }
    }

    /// Drain every outcome that has arrived. Non-blocking.
    pub fn poll(&self) -> Vec<LoadOutcome> {
        self.rx.try_iter().collect()
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<LoadOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileSource;
    use std::fs;
    use std::time::Duration;

    fn file_source(name: &str, content: &str) -> (RecordSource, std::path::PathBuf) {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        (RecordSource::File(FileSource::new(&path).unwrap()), path)
    }

    #[test]
    fn load_records_parses_file_source() {
        let (source, path) = file_source(
            "roster_loader_sync.json",
            r#"[{"id":"1","name":"Aaron"},{"id":"2","name":"Bea"}]"#,
        );

        let parsed = load_records(&source);
        let _ = fs::remove_file(&path);

        let parsed = parsed.unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1].get("name"), Some("Bea"));
    }

    #[test]
    fn load_records_reports_parse_error() {
        let (source, path) = file_source("roster_loader_not_array.json", r#"{"id":"1"}"#);

        let result = load_records(&source);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(AppError::Parse(_))), "got: {:?}", result);
    }

    #[test]
    fn spawn_delivers_outcome_tagged_with_request() {
        let (source, path) = file_source("roster_loader_spawn.json", r#"[{"id":"1"}]"#);
        let loader = Loader::new(source);

        loader.spawn(RequestId::new(7));
        let outcome = loader.recv_timeout(Duration::from_secs(5));
        let _ = fs::remove_file(&path);

        let outcome = outcome.expect("load should complete");
        assert_eq!(outcome.request, RequestId::new(7));
        assert_eq!(outcome.result.unwrap().records.len(), 1);
    }

    #[test]
    fn poll_is_empty_without_requests() {
        let (source, path) = file_source("roster_loader_idle.json", "[]");
        let loader = Loader::new(source);
        let _ = fs::remove_file(&path);

        assert!(loader.poll().is_empty());
    }

    #[test]
    fn spawn_delivers_failures_too() {
        let (source, path) = file_source("roster_loader_gone.json", "[]");
        let loader = Loader::new(source);
        fs::remove_file(&path).unwrap();

        loader.spawn(RequestId::new(1));
        let outcome = loader
            .recv_timeout(Duration::from_secs(5))
            .expect("failure should still be delivered");

        assert!(matches!(outcome.result, Err(AppError::InputRead(_))));
    }
}
