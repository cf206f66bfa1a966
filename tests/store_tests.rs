//! Store Tests
//!
//! These tests verify:
//! - CSV load/persist round-trips
//! - Load failure on a missing file
//! - The engine rewriting the CSV file on SET

use std::fs;

use rhcp::protocol::EngineV1;
use rhcp::store::{CsvStore, MemoryStore, Record, StatusStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_csv_store(contents: &str) -> (TempDir, CsvStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("status.csv");
    fs::write(&path, contents).unwrap();
    (temp_dir, CsvStore::new(path))
}

// =============================================================================
// CsvStore Tests
// =============================================================================

#[test]
fn test_csv_load_two_column_rows() {
    let (_temp, store) = setup_csv_store("lamp1,off\nlamp2,on\n");

    let records = store.load().unwrap();
    assert_eq!(
        records,
        vec![Record::new("lamp1", "off"), Record::new("lamp2", "on")]
    );
}

#[test]
fn test_csv_persist_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("status.csv"));

    let records = vec![Record::new("lamp1", "on"), Record::new("door", "off")];
    store.persist(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn test_csv_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("nope.csv"));

    assert!(store.load().is_err());
}

#[test]
fn test_csv_persist_overwrites_previous_rows() {
    let (_temp, store) = setup_csv_store("lamp1,off\nlamp2,on\n");

    store.persist(&[Record::new("lamp1", "on")]).unwrap();

    assert_eq!(store.load().unwrap(), vec![Record::new("lamp1", "on")]);
}

#[test]
fn test_csv_preserves_record_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("status.csv"));

    let records = vec![
        Record::new("c", "on"),
        Record::new("a", "off"),
        Record::new("b", "on"),
    ];
    store.persist(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

// =============================================================================
// MemoryStore Tests
// =============================================================================

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::new(vec![Record::new("lamp1", "off")]);

    store.persist(&[Record::new("lamp1", "on")]).unwrap();

    assert_eq!(store.load().unwrap(), vec![Record::new("lamp1", "on")]);
}

#[test]
fn test_memory_store_default_is_empty() {
    let store = MemoryStore::default();
    assert!(store.load().unwrap().is_empty());
}

// =============================================================================
// Engine-over-CsvStore Tests
// =============================================================================

#[test]
fn test_engine_set_rewrites_csv_file() {
    let (_temp, store) = setup_csv_store("lamp1,off\nlamp2,on\n");
    let engine = EngineV1::new();

    let response = engine.process("SET lamp1 1.0\r\nStatus: on\r\n\r\n\r\n", &store);
    assert_eq!(response, "RHCP/1.0 200 OK\r\nObject: lamp1\r\nStatus: on\r\n\r\n");

    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, "lamp1,on\nlamp2,on\n");
}

#[test]
fn test_engine_get_reads_csv_file() {
    let (_temp, store) = setup_csv_store("lamp1,off\n");
    let engine = EngineV1::new();

    let response = engine.process("GET lamp1 1.0\r\n\r\n\r\n", &store);
    assert_eq!(response, "RHCP/1.0 200 OK\r\nObject: lamp1\r\nStatus: off\r\n\r\n");
}

#[test]
fn test_engine_missing_csv_file_is_500() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(temp_dir.path().join("nope.csv"));
    let engine = EngineV1::new();

    let response = engine.process("GET lamp1 1.0\r\n\r\n\r\n", &store);
    assert_eq!(response, "RHCP/1.0 500 Internal Server Error\r\n\r\n");
}
