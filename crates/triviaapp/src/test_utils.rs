use crate::store::seed_default_categories;
use crate::store::sqlite::SqliteStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: SqliteStore,
    pub db_path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// A seeded SQLite store in a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("trivia.db");
        let mut store = SqliteStore::open(&db_path).expect("failed to open store");
        seed_default_categories(&mut store).expect("failed to seed categories");
        Self {
            _temp_dir: temp_dir,
            store,
            db_path,
        }
    }

    /// Opens a second connection to the same database file.
    pub fn reopen(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path).expect("failed to reopen store")
    }
}
