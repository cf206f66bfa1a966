//! Store Module
//!
//! The flat record store backing the protocol.
//!
//! The store is a per-request snapshot, not a cache: the engine loads every
//! record before an operation and rewrites every record after a successful
//! SET. Key uniqueness is assumed rather than enforced; a linear scan takes
//! the first match.

mod csv;
mod memory;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use csv::CsvStore;
pub use memory::MemoryStore;

/// A single row of the store: a key and its recorded status value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Interface the protocol engine requires from a backing store.
///
/// Both operations may fail; the engine maps either failure to 500.
/// Callers that serve requests concurrently must serialize the whole
/// load-mutate-persist sequence themselves (the engine holds no lock).
pub trait StatusStore {
    /// Read the full ordered record set
    fn load(&self) -> Result<Vec<Record>>;

    /// Rewrite the full ordered record set
    fn persist(&self, records: &[Record]) -> Result<()>;
}
