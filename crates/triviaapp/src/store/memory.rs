use super::TriviaStore;
use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, NewQuestion, Question};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Ids are assigned from a counter that never rewinds, so a deleted id is not
/// handed out again (matching `AUTOINCREMENT` in the SQLite store).
#[derive(Default)]
pub struct InMemoryStore {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<i64, Question>,
    last_category_id: i64,
    last_question_id: i64,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given category labels, ids starting at 1.
    pub fn with_categories<I, K>(labels: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut store = Self::new();
        for label in labels {
            store.push_category(label.as_ref());
        }
        store
    }

    /// Make every subsequent write fail, for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn push_category(&mut self, kind: &str) -> Category {
        self.last_category_id += 1;
        let category = Category::new(self.last_category_id, kind);
        self.categories.insert(category.id, category.clone());
        category
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(TriviaError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl TriviaStore for InMemoryStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn insert_category(&mut self, kind: &str) -> Result<Category> {
        self.check_writable()?;
        Ok(self.push_category(kind))
    }

    fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.questions.values().cloned().collect())
    }

    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    fn get_question(&self, id: i64) -> Result<Option<Question>> {
        Ok(self.questions.get(&id).cloned())
    }

    fn insert_question(&mut self, question: &NewQuestion) -> Result<Question> {
        self.check_writable()?;
        if !self.categories.contains_key(&question.category) {
            return Err(TriviaError::Constraint(format!(
                "Category {} does not exist",
                question.category
            )));
        }
        self.last_question_id += 1;
        let stored = question.clone().with_id(self.last_question_id);
        self.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn delete_question(&mut self, id: i64) -> Result<()> {
        self.check_writable()?;
        if self.questions.remove(&id).is_none() {
            return Err(TriviaError::QuestionNotFound(id));
        }
        Ok(())
    }

    fn count_questions(&self) -> Result<usize> {
        Ok(self.questions.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::DEFAULT_CATEGORIES;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_categories(DEFAULT_CATEGORIES),
            }
        }

        /// No categories at all.
        pub fn empty() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` questions to the stored (one-based) category.
        pub fn with_questions(mut self, count: usize, category: i64) -> Self {
            for i in 0..count {
                let q = NewQuestion::new(
                    format!("Question {} in category {}", i + 1, category),
                    format!("Answer {}", i + 1),
                    CategoryId(category),
                    (i % 5) as i64 + 1,
                );
                self.store.insert_question(&q).unwrap();
            }
            self
        }

        pub fn with_question(mut self, text: &str, answer: &str, category: i64) -> Self {
            let q = NewQuestion::new(text, answer, CategoryId(category), 1);
            self.store.insert_question(&q).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
