//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every trivia operation, whichever transport drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw client category ids become [`ClientCategoryId`],
//!   a `POST /questions` body becomes either a search or a create)
//! - **Supplies randomness** to the quiz selector
//! - **Returns structured types** (`Result<...>` of serializable results)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **HTTP concerns**: status codes and the `{success, error, message}` envelope
//!   live in the server binary
//!
//! ## Search or Create
//!
//! `POST /questions` carries two operations. A body with a `searchTerm` field is a
//! search and any create fields next to it are ignored; any other body is a
//! create. [`TriviaApi::submit_questions`] makes that decision.
//!
//! ## Generic Over TriviaStore
//!
//! `TriviaApi<S: TriviaStore>` is generic over the storage backend:
//! - Production: `TriviaApi<SqliteStore>`
//! - Testing: `TriviaApi<InMemoryStore>`

use crate::commands::{
    self, CategoryListing, CategoryQuestions, Created, Deleted, QuestionInput, QuestionPage,
    QuizRequest, QuizTurn, SearchResults,
};
use crate::error::{Result, TriviaError};
use crate::model::ClientCategoryId;
use crate::store::TriviaStore;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /questions`.
///
/// Only `searchTerm` is read up front. The remaining fields stay raw until the
/// body turns out to be a create, so a search never fails on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionsBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl QuestionsBody {
    /// The create fields, parsed and type-checked.
    pub fn into_input(self) -> Result<QuestionInput> {
        QuestionInput::deserialize(Value::Object(self.rest))
            .map_err(|e| TriviaError::InvalidInput(format!("Invalid question fields: {}", e)))
    }
}

/// Result of `POST /questions`, shaped like whichever operation ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuestionsOutcome {
    Searched(SearchResults),
    Created(Created),
}

/// The main API facade for trivia operations.
///
/// All clients (the HTTP server, tests) should interact through this API.
pub struct TriviaApi<S: TriviaStore> {
    store: S,
}

impl<S: TriviaStore> TriviaApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn categories(&self) -> Result<CategoryListing> {
        commands::categories::list(&self.store)
    }

    pub fn questions(&self, page: i64) -> Result<QuestionPage> {
        commands::list::run(&self.store, page)
    }

    pub fn category_questions(&self, category: i64) -> Result<CategoryQuestions> {
        commands::categories::questions(&self.store, ClientCategoryId(category))
    }

    pub fn search_questions(&self, term: &str) -> Result<SearchResults> {
        commands::search::run(&self.store, term)
    }

    pub fn create_question(&mut self, input: QuestionInput, page: i64) -> Result<Created> {
        commands::create::run(&mut self.store, input, page)
    }

    pub fn submit_questions(&mut self, body: QuestionsBody, page: i64) -> Result<QuestionsOutcome> {
        match body.search_term {
            Some(term) => self.search_questions(&term).map(QuestionsOutcome::Searched),
            None => {
                let input = body.into_input()?;
                self.create_question(input, page)
                    .map(QuestionsOutcome::Created)
            }
        }
    }

    pub fn delete_question(&mut self, id: i64, page: i64) -> Result<Deleted> {
        commands::delete::run(&mut self.store, id, page)
    }

    pub fn play_quiz(&self, request: &QuizRequest) -> Result<QuizTurn> {
        self.play_quiz_with(request, &mut rand::thread_rng())
    }

    pub fn play_quiz_with<R: Rng + ?Sized>(
        &self,
        request: &QuizRequest,
        rng: &mut R,
    ) -> Result<QuizTurn> {
        commands::quiz::run(
            &self.store,
            ClientCategoryId(request.quiz_category.id),
            &request.previous_questions,
            rng,
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> TriviaApi<InMemoryStore> {
        TriviaApi::new(
            StoreFixture::new()
                .with_question("Which river is longest?", "Nile", 3)
                .with_question("Who painted Guernica?", "Picasso", 2)
                .build(),
        )
    }

    fn body(json: &str) -> QuestionsBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn search_term_selects_search() {
        let mut api = api();
        let outcome = api
            .submit_questions(body(r#"{"searchTerm": "which"}"#), 1)
            .unwrap();
        assert!(matches!(outcome, QuestionsOutcome::Searched(ref r) if r.total_questions == 1));
    }

    #[test]
    fn search_ignores_create_fields() {
        let mut api = api();
        let outcome = api
            .submit_questions(
                body(r#"{"searchTerm": "guernica", "question": "Q?", "answer": "A", "category": 0, "difficulty": 1}"#),
                1,
            )
            .unwrap();
        assert!(matches!(outcome, QuestionsOutcome::Searched(_)));
        assert_eq!(api.store().count_questions().unwrap(), 2);
    }

    #[test]
    fn search_skips_malformed_create_fields() {
        let mut api = api();
        let outcome = api
            .submit_questions(
                body(r#"{"searchTerm": "river", "category": "Science", "difficulty": "hard"}"#),
                1,
            )
            .unwrap();
        assert!(matches!(outcome, QuestionsOutcome::Searched(ref r) if r.total_questions == 1));
    }

    #[test]
    fn malformed_create_field_is_invalid_input() {
        let mut api = api();
        let err = api
            .submit_questions(
                body(r#"{"question": "Q?", "answer": "A", "category": "Science", "difficulty": 1}"#),
                1,
            )
            .unwrap_err();
        assert!(matches!(err, TriviaError::InvalidInput(_)), "got {:?}", err);
        assert_eq!(api.store().count_questions().unwrap(), 2);
    }

    #[test]
    fn body_without_search_term_creates() {
        let mut api = api();
        let outcome = api
            .submit_questions(
                body(r#"{"question": "What is Earth?", "answer": "planet", "category": "1", "difficulty": "1"}"#),
                1,
            )
            .unwrap();
        match outcome {
            QuestionsOutcome::Created(created) => {
                assert_eq!(created.created, 3);
                assert_eq!(created.total_questions, 3);
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_is_invalid_create() {
        let mut api = api();
        let err = api.submit_questions(body("{}"), 1).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn outcome_serializes_untagged() {
        let mut api = api();
        let outcome = api
            .submit_questions(body(r#"{"searchTerm": "river"}"#), 1)
            .unwrap();
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["totalQuestions"], 1);
        assert!(json.get("created").is_none());
    }

    #[test]
    fn category_questions_takes_client_id() {
        let api = api();
        let res = api.category_questions(2).unwrap();
        assert_eq!(res.category.0, 3);
        assert_eq!(res.total_questions, 1);
    }

    #[test]
    fn quiz_uses_request_fields() {
        let api = api();
        let request = QuizRequest {
            quiz_category: commands::QuizCategory { id: 1 },
            previous_questions: vec![],
        };
        let turn = api.play_quiz(&request).unwrap();
        assert_eq!(turn.question.map(|q| q.id), Some(2));

        let request = QuizRequest {
            previous_questions: vec![2],
            ..request
        };
        assert_eq!(api.play_quiz(&request).unwrap().question, None);
    }
}
