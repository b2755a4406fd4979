use super::helpers::category_labels;
use crate::error::{Result, TriviaError};
use crate::model::{CategoryId, ClientCategoryId, Question};
use crate::store::TriviaStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub categories: Vec<String>,
    pub total_categories: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    /// Stored (one-based) id of the requested category.
    pub category: CategoryId,
    pub total_questions: usize,
}

/// Category labels in id order, so a label's position is its client id.
pub fn list<S: TriviaStore>(store: &S) -> Result<CategoryListing> {
    let categories = category_labels(store)?;
    if categories.is_empty() {
        return Err(TriviaError::NotFound("No categories available".to_string()));
    }
    Ok(CategoryListing {
        total_categories: categories.len(),
        categories,
    })
}

/// Every question of one category, unpaginated. An unknown or empty category
/// is not an error; it just has no questions.
pub fn questions<S: TriviaStore>(store: &S, category: ClientCategoryId) -> Result<CategoryQuestions> {
    let stored = category.to_stored()?;
    let questions = store.questions_in_category(stored)?;
    Ok(CategoryQuestions {
        total_questions: questions.len(),
        questions,
        category: stored,
    })
}
