//! In-memory store
//!
//! Vec-backed store for tests and in-process callers.

use parking_lot::Mutex;

use crate::error::Result;

use super::{Record, StatusStore};

/// In-process store holding records behind a mutex.
///
/// The mutex guards individual load/persist calls only; a full
/// load-mutate-persist sequence still needs external serialization when
/// callers run concurrently.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
}

impl MemoryStore {
    /// Create a store seeded with the given records
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Snapshot of the current records
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }
}

impl StatusStore for MemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.lock().clone())
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        *self.records.lock() = records.to_vec();
        Ok(())
    }
}
