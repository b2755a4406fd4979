use super::helpers::page_of_questions;
use crate::error::{Result, TriviaError};
use crate::model::{lenient, ClientCategoryId, NewQuestion, Question};
use crate::store::TriviaStore;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Create fields of a `POST /questions` body, as sent by the client. Every field
/// is optional at the parsing stage so that a missing one is a validation
/// failure rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionInput {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    /// Zero-based client category id.
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub difficulty: Option<i64>,
}

impl QuestionInput {
    /// Validates the input and translates the client category id.
    pub fn into_new_question(self) -> Result<NewQuestion> {
        let question = required_text(self.question, "question")?;
        let answer = required_text(self.answer, "answer")?;
        let category = self
            .category
            .ok_or_else(|| missing("category"))
            .map(ClientCategoryId)?
            .to_stored()?;
        let difficulty = self.difficulty.ok_or_else(|| missing("difficulty"))?;
        Ok(NewQuestion::new(question, answer, category, difficulty))
    }
}

fn missing(field: &str) -> TriviaError {
    TriviaError::InvalidInput(format!("Field '{}' is required", field))
}

fn required_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(TriviaError::InvalidInput(format!(
            "Field '{}' must not be blank",
            field
        ))),
        None => Err(missing(field)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Created {
    pub created: i64,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// Stores a new question and returns its id with `page` of the updated listing.
pub fn run<S: TriviaStore>(store: &mut S, input: QuestionInput, page: i64) -> Result<Created> {
    let new_question = input.into_new_question()?;
    let stored = store.insert_question(&new_question)?;
    info!(id = stored.id, category = %stored.category, "question created");

    let (questions, total_questions) = page_of_questions(store, page)?;
    Ok(Created {
        created: stored.id,
        questions,
        total_questions,
    })
}
