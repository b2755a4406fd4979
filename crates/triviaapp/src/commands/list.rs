use super::helpers::{category_labels, page_of_questions};
use crate::error::{Result, TriviaError};
use crate::model::Question;
use crate::store::TriviaStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<String>,
}

/// One page of all questions, with the category labels the list view renders
/// alongside. A page holding nothing is not found.
pub fn run<S: TriviaStore>(store: &S, page: i64) -> Result<QuestionPage> {
    let (questions, total_questions) = page_of_questions(store, page)?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound(format!(
            "Page {} has no questions",
            page
        )));
    }
    Ok(QuestionPage {
        questions,
        total_questions,
        categories: category_labels(store)?,
    })
}
