//! Temporary database fixtures.
//!
//! Each test server gets its own directory holding a fresh catalog and
//! history database; dropping the TempDir cleans everything up.

use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_databases() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_db = dir.path().join("catalog.db");
    let history_db = dir.path().join("history.db");
    (dir, catalog_db, history_db)
}
