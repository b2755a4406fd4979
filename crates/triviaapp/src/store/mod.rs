//! # Storage Layer
//!
//! The [`TriviaStore`] trait is the seam between the command layer and the
//! relational data. It offers exactly what the handlers need: ordered full scans,
//! a category equality filter, lookup by id, one insert and one delete.
//!
//! ## Ordering
//!
//! Every listing comes back ordered by id ascending. Pagination and the "first
//! page after a write" responses rely on that order being stable.
//!
//! ## Referential Integrity
//!
//! A question's category must name an existing category. Stores reject an insert
//! that breaks this with [`TriviaError::Constraint`](crate::error::TriviaError),
//! which the HTTP layer reports like any other write failure.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: production store on SQLite with a foreign key on
//!   `questions.category`.
//! - [`memory::InMemoryStore`]: for testing logic without a database file.
//!
//! ## Schema
//!
//! ```text
//! categories(id INTEGER PRIMARY KEY, type TEXT)
//! questions(id INTEGER PRIMARY KEY, question TEXT, answer TEXT,
//!           category INTEGER REFERENCES categories(id), difficulty INTEGER)
//! ```

use crate::error::Result;
use crate::model::{Category, CategoryId, NewQuestion, Question, DEFAULT_CATEGORIES};
use tracing::info;

pub mod memory;
pub mod sqlite;

/// Abstract interface for question and category storage.
pub trait TriviaStore {
    /// All categories, ordered by id
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// Add a category; the store assigns the id
    fn insert_category(&mut self, kind: &str) -> Result<Category>;

    /// All questions, ordered by id
    fn list_questions(&self) -> Result<Vec<Question>>;

    /// Questions whose stored category equals `category`, ordered by id
    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>>;

    /// Get a question by id, `None` if absent
    fn get_question(&self, id: i64) -> Result<Option<Question>>;

    /// Insert a question; the store assigns the id
    fn insert_question(&mut self, question: &NewQuestion) -> Result<Question>;

    /// Remove a question permanently. Fails with `QuestionNotFound` if absent.
    fn delete_question(&mut self, id: i64) -> Result<()>;

    fn count_questions(&self) -> Result<usize> {
        Ok(self.list_questions()?.len())
    }
}

/// Seeds [`DEFAULT_CATEGORIES`] into an empty store.
///
/// Returns the number of categories added; zero when the store already had any.
pub fn seed_default_categories<S: TriviaStore>(store: &mut S) -> Result<usize> {
    if !store.list_categories()?.is_empty() {
        return Ok(0);
    }
    for kind in DEFAULT_CATEGORIES {
        store.insert_category(kind)?;
    }
    info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}
