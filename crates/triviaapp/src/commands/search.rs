use crate::error::Result;
use crate::model::Question;
use crate::store::TriviaStore;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// Questions whose text contains `term`, ignoring case. Every match is returned,
/// ordered by id; an empty term matches everything.
pub fn run<S: TriviaStore>(store: &S, term: &str) -> Result<SearchResults> {
    let needle = term.to_lowercase();
    let questions: Vec<Question> = store
        .list_questions()?
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect();
    debug!(term, matches = questions.len(), "searched questions");
    Ok(SearchResults {
        total_questions: questions.len(),
        questions,
    })
}
