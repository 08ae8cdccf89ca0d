//! Recently generated passwords, newest first.

mod file;

use std::fmt;
use std::io;

pub use file::JsonFileStore;

/// Most entries kept.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "history I/O error: {}", e),
            StoreError::Parse(e) => write!(f, "history file is malformed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e)
    }
}

/// Persistent backing for `History`: read on startup, write after each new
/// entry, clear on request.
pub trait HistoryStore {
    fn load(&mut self) -> Result<Vec<String>, StoreError>;
    fn save(&mut self, entries: &[String]) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Store that remembers nothing. Used when history is turned off.
#[derive(Debug, Default)]
pub struct NullStore;

impl HistoryStore for NullStore {
    fn load(&mut self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }

    fn save(&mut self, _entries: &[String]) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Bounded, deduplicated history. The in-memory list is authoritative;
/// store failures are logged and otherwise ignored.
pub struct History<S: HistoryStore> {
    entries: Vec<String>,
    store: S,
}

impl<S: HistoryStore> History<S> {
    /// Load entries from `store`. A failed or oversized load is tolerated.
    pub fn open(mut store: S) -> Self {
        let mut entries = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load history, starting empty");
            Vec::new()
        });
        entries.truncate(HISTORY_LIMIT);
        Self { entries, store }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Put `password` at the front. Returns false, without touching the
    /// store, when it is already present.
    pub fn record(&mut self, password: &str) -> bool {
        if self.entries.iter().any(|e| e == password) {
            return false;
        }

        self.entries.insert(0, password.to_string());
        self.entries.truncate(HISTORY_LIMIT);

        match self.store.save(&self.entries) {
            Ok(()) => tracing::debug!(entries = self.entries.len(), "history saved"),
            Err(e) => tracing::warn!(error = %e, "could not save history"),
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "could not clear history");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
