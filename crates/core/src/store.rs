//! High-score persistence.
//!
//! The engine only needs to read one integer at session start and overwrite it
//! whenever a new best is reached. [`FileStore`] keeps it as a plain-text
//! decimal record; [`MemoryStore`] keeps it in memory for tests and headless
//! runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::HIGHSCORE_FILE;

/// Backend holding the best score across sessions.
pub trait HighScoreStore {
    /// Read the stored value. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<u64>, StoreError>;

    /// Overwrite the stored value.
    fn save(&mut self, score: u64) -> Result<(), StoreError>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        (**self).save(score)
    }
}

/// Plain-text file holding a single decimal integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(HIGHSCORE_FILE)
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        parse_record(&content).map(Some)
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Parse a stored record, tolerating surrounding whitespace.
pub fn parse_record(content: &str) -> Result<u64, StoreError> {
    content.trim().parse().map_err(|_| StoreError::Parse {
        content: content.to_string(),
    })
}

/// In-memory store, optionally pre-seeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<u64>,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u64) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }

    pub fn value(&self) -> Option<u64> {
        self.value
    }

    /// Number of successful `save` calls
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        self.value = Some(score);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record_accepts_trailing_newline() {
        assert_eq!(parse_record("2048").unwrap(), 2048);
        assert_eq!(parse_record(" 512\n").unwrap(), 512);
    }

    #[test]
    fn parse_record_rejects_garbage() {
        assert!(matches!(parse_record("abc"), Err(StoreError::Parse { .. })));
        assert!(matches!(parse_record("-4"), Err(StoreError::Parse { .. })));
        assert!(matches!(parse_record(""), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("none.txt"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_overwrites_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.txt");
        let mut store = FileStore::new(&path);

        store.save(1000).unwrap();
        store.save(36).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "36");
        assert_eq!(store.load().unwrap(), Some(36));
    }

    #[test]
    fn file_store_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file.
        let mut store = FileStore::new(dir.path());
        assert!(matches!(store.save(8), Err(StoreError::Io { .. })));
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::with_value(4);
        assert_eq!(store.load().unwrap(), Some(4));
        store.save(16).unwrap();
        assert_eq!(store.value(), Some(16));
        assert_eq!(store.saves(), 1);
    }
}
