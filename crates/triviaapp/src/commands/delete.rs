use super::helpers::page_of_questions;
use crate::error::{Result, TriviaError};
use crate::model::Question;
use crate::store::TriviaStore;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deleted {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Removes a question permanently and returns `page` of what remains.
pub fn run<S: TriviaStore>(store: &mut S, id: i64, page: i64) -> Result<Deleted> {
    if store.get_question(id)?.is_none() {
        return Err(TriviaError::QuestionNotFound(id));
    }
    store.delete_question(id)?;
    info!(id, "question deleted");

    let (questions, total_questions) = page_of_questions(store, page)?;
    Ok(Deleted {
        deleted: id,
        questions,
        total_questions,
    })
}
