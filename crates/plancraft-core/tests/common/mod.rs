use std::path::Path;

use plancraft_core::{Engine, EngineBuilder, SqliteStore};
use tempfile::TempDir;

/// Helper function to create a test engine backed by a temporary database
pub fn create_test_engine() -> (TempDir, Engine<SqliteStore>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let engine = open_engine(&temp_dir.path().join("test.db"));
    (temp_dir, engine)
}

/// Opens an engine on an existing database path
pub fn open_engine(db_path: &Path) -> Engine<SqliteStore> {
    EngineBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to create engine")
}
