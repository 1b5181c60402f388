use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Shape of the persisted progress document.
#[derive(Debug, Serialize, Deserialize)]
struct ProgressDoc {
    current_index: usize,
}

/// Persists the sequential-mode cursor as a small JSON document.
///
/// Single-process, single-writer model: loaded once at startup, written once
/// on clean shutdown, full overwrite each time.
pub struct ProgressTracker {
    path: PathBuf,
}

impl ProgressTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the saved cursor, clamped to a valid index.
    ///
    /// Never fails: a missing, unreadable, or malformed document, or a stale
    /// index from a shorter word list, all fall back to `0`. Corruption must
    /// never block startup.
    pub fn load(&self, record_count: usize) -> usize {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return 0,
        };

        match serde_json::from_str::<ProgressDoc>(&data) {
            Ok(doc) if doc.current_index < record_count => doc.current_index,
            Ok(_) | Err(_) => 0,
        }
    }

    /// Overwrite the document with the given index.
    ///
    /// The caller guarantees the index is in bounds; no re-validation here.
    /// Failures surface to the caller so the shutdown path can log them
    /// without crashing.
    pub fn save(&self, index: usize) -> io::Result<()> {
        let doc = ProgressDoc {
            current_index: index,
        };
        let data = serde_json::to_string_pretty(&doc).map_err(io::Error::other)?;
        fs::write(&self.path, data)
    }
}
