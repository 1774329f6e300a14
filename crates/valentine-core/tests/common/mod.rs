use tempfile::TempDir;
use valentine_core::{AnswerStore, StoreBuilder};

/// Helper function to create a store backed by a temporary database file
pub fn create_test_store() -> (TempDir, AnswerStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Reopens the database a previous store wrote to.
pub fn reopen_store(temp_dir: &TempDir) -> AnswerStore {
    StoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to reopen store")
}
