use super::TriviaStore;
use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, NewQuestion, Question};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    category   INTEGER NOT NULL REFERENCES categories(id),
    difficulty INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS questions_category_idx ON questions(category);
";

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite-backed store.
///
/// Opening a store always applies the schema (idempotent) and turns foreign key
/// enforcement on for the connection, so a question can never point at a
/// missing category.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened sqlite store");
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Private database that lives as long as the store.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, path })
    }

    /// Database file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn query_questions(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, question_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: CategoryId(row.get(3)?),
        difficulty: row.get(4)?,
    })
}

/// Constraint failures become [`TriviaError::Constraint`]; everything else
/// stays an infrastructure error.
fn write_error(err: rusqlite::Error) -> TriviaError {
    match err {
        rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
            TriviaError::Constraint(msg.unwrap_or_else(|| e.to_string()))
        }
        other => TriviaError::Sqlite(other),
    }
}

impl TriviaStore for SqliteStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: CategoryId(row.get(0)?),
                kind: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn insert_category(&mut self, kind: &str) -> Result<Category> {
        self.conn
            .execute("INSERT INTO categories (type) VALUES (?1)", params![kind])
            .map_err(write_error)?;
        Ok(Category::new(self.conn.last_insert_rowid(), kind))
    }

    fn list_questions(&self) -> Result<Vec<Question>> {
        self.query_questions(
            &format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS),
            [],
        )
    }

    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        self.query_questions(
            &format!(
                "SELECT {} FROM questions WHERE category = ?1 ORDER BY id",
                QUESTION_COLUMNS
            ),
            params![category.0],
        )
    }

    fn get_question(&self, id: i64) -> Result<Option<Question>> {
        let question = self
            .conn
            .query_row(
                &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
                params![id],
                question_from_row,
            )
            .optional()?;
        Ok(question)
    }

    fn insert_question(&mut self, question: &NewQuestion) -> Result<Question> {
        self.conn
            .execute(
                "INSERT INTO questions (question, answer, category, difficulty)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    question.question,
                    question.answer,
                    question.category.0,
                    question.difficulty
                ],
            )
            .map_err(write_error)?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "inserted question");
        Ok(question.clone().with_id(id))
    }

    fn delete_question(&mut self, id: i64) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1", params![id])
            .map_err(write_error)?;
        if removed == 0 {
            return Err(TriviaError::QuestionNotFound(id));
        }
        debug!(id, "deleted question");
        Ok(())
    }

    fn count_questions(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_default_categories;
    use crate::test_utils::TestEnv;

    fn seeded() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        seed_default_categories(&mut store).unwrap();
        store
    }

    #[test]
    fn lists_questions_in_id_order() {
        let mut store = seeded();
        for text in ["b", "a", "c"] {
            store
                .insert_question(&NewQuestion::new(text, "x", CategoryId(2), 3))
                .unwrap();
        }
        let texts: Vec<String> = store
            .list_questions()
            .unwrap()
            .into_iter()
            .map(|q| q.question)
            .collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
        assert_eq!(store.count_questions().unwrap(), 3);
    }

    #[test]
    fn unknown_category_is_a_constraint_error() {
        let mut store = seeded();
        let err = store
            .insert_question(&NewQuestion::new("Q", "A", CategoryId(42), 1))
            .unwrap_err();
        assert!(matches!(err, TriviaError::Constraint(_)), "got {:?}", err);
    }

    #[test]
    fn get_and_delete_question() {
        let mut store = seeded();
        let q = store
            .insert_question(&NewQuestion::new("Q", "A", CategoryId(1), 2))
            .unwrap();
        assert_eq!(store.get_question(q.id).unwrap(), Some(q.clone()));

        store.delete_question(q.id).unwrap();
        assert_eq!(store.get_question(q.id).unwrap(), None);
        assert!(matches!(
            store.delete_question(q.id),
            Err(TriviaError::QuestionNotFound(_))
        ));
    }

    #[test]
    fn filters_by_category() {
        let mut store = seeded();
        for category in [1, 3, 3, 5] {
            store
                .insert_question(&NewQuestion::new("Q", "A", CategoryId(category), 1))
                .unwrap();
        }
        let found = store.questions_in_category(CategoryId(3)).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|q| q.category == CategoryId(3)));
    }

    #[test]
    fn questions_persist_across_reopen() {
        let mut env = TestEnv::new();
        let q = env
            .store
            .insert_question(&NewQuestion::new("Q", "A", CategoryId(4), 5))
            .unwrap();

        let reopened = env.reopen();
        assert_eq!(reopened.get_question(q.id).unwrap(), Some(q));
        assert_eq!(reopened.list_categories().unwrap().len(), 6);
        assert_eq!(reopened.path(), Some(env.db_path.as_path()));
    }

    #[test]
    fn reopening_keeps_seed_idempotent() {
        let env = TestEnv::new();
        let mut reopened = env.reopen();
        assert_eq!(seed_default_categories(&mut reopened).unwrap(), 0);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/trivia.db");
        SqliteStore::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut env = TestEnv::new();
        let first = env
            .store
            .insert_question(&NewQuestion::new("Q1", "A", CategoryId(1), 1))
            .unwrap();
        env.store.delete_question(first.id).unwrap();
        let second = env
            .store
            .insert_question(&NewQuestion::new("Q2", "A", CategoryId(1), 1))
            .unwrap();
        assert!(second.id > first.id);
    }
}
