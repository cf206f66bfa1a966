//! CSV-backed store
//!
//! Reads and rewrites a headerless two-column CSV file.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::Result;

use super::{Record, StatusStore};

/// File-backed store over a two-column CSV file.
///
/// A missing or unreadable file is a load error, which the engine reports
/// as 500; the store never creates the file on its own.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store over the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusStore for CsvStore {
    fn load(&self) -> Result<Vec<Record>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
