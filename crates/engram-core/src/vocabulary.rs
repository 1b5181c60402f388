use std::fs;
use std::io;
use std::path::Path;

use engram_types::WordRecord;

use crate::error::LoadError;

/// Ordered, read-only word list parsed from a tab-separated file.
///
/// File order is significant: it defines the sequential-learning traversal
/// and the index space the progress cursor addresses.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<WordRecord>,
    skipped: usize,
}

impl RecordStore {
    /// Load vocabulary from a `headword\tphonetics\tdefinition` file.
    ///
    /// The whole file is parsed eagerly. Blank lines and lines that do not
    /// split into exactly three tab-separated fields are skipped (counted,
    /// not reported) — deliberate leniency, matching the file format's
    /// hand-edited origins.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LoadError::FileNotFound(path.to_path_buf())
            } else {
                LoadError::ReadError(e)
            }
        })?;

        let mut records = Vec::new();
        let mut skipped = 0;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() == 3 {
                records.push(WordRecord::new(parts[0], parts[1], parts[2]));
            } else {
                skipped += 1;
            }
        }

        Ok(Self { records, skipped })
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&WordRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty store is not a parse error, but callers must treat it as a
    /// startup precondition failure.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of non-blank lines excluded for not having three fields.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}
