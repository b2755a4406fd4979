use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use triviaapp::api::{QuestionsBody, QuestionsOutcome};
use triviaapp::commands::{
    CategoryListing, CategoryQuestions, Deleted, QuestionPage, QuizRequest, QuizTurn,
};
use triviaapp::pagination::{page_from_param, DEFAULT_PAGE};
use triviaapp::store::TriviaStore;

use super::{ApiError, AppState};

/// `{"success": true, ...body}`
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

fn success<T: Serialize>(body: T) -> Json<Success<T>> {
    Json(Success {
        success: true,
        body,
    })
}

type Reply<T> = Result<Json<Success<T>>, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

/// An unreadable query string counts as no query at all.
fn page_of(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    match query {
        Ok(Query(q)) => page_from_param(q.page.as_deref()),
        Err(_) => DEFAULT_PAGE,
    }
}

pub async fn list_categories<S>(State(api): State<AppState<S>>) -> Reply<CategoryListing>
where
    S: TriviaStore + Send + 'static,
{
    let api = api.lock().await;
    api.categories().map(success).map_err(ApiError::from_read)
}

pub async fn list_questions<S>(
    State(api): State<AppState<S>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Reply<QuestionPage>
where
    S: TriviaStore + Send + 'static,
{
    let page = page_of(query);
    let api = api.lock().await;
    api.questions(page).map(success).map_err(ApiError::from_read)
}

pub async fn category_questions<S>(
    State(api): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Reply<CategoryQuestions>
where
    S: TriviaStore + Send + 'static,
{
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let api = api.lock().await;
    api.category_questions(id)
        .map(success)
        .map_err(ApiError::from_read)
}

/// Search when the body carries `searchTerm`, create otherwise.
pub async fn submit_questions<S>(
    State(api): State<AppState<S>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionsBody>, JsonRejection>,
) -> Reply<QuestionsOutcome>
where
    S: TriviaStore + Send + 'static,
{
    let Json(body) = body.map_err(ApiError::from_json)?;
    let page = page_of(query);
    let mut api = api.lock().await;
    api.submit_questions(body, page)
        .map(success)
        .map_err(ApiError::from_write)
}

pub async fn delete_question<S>(
    State(api): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Reply<Deleted>
where
    S: TriviaStore + Send + 'static,
{
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let page = page_of(query);
    let mut api = api.lock().await;
    api.delete_question(id, page)
        .map(success)
        .map_err(ApiError::from_write)
}

pub async fn play_quiz<S>(
    State(api): State<AppState<S>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Reply<QuizTurn>
where
    S: TriviaStore + Send + 'static,
{
    let Json(request) = body.map_err(ApiError::from_json)?;
    debug!(
        category = request.quiz_category.id,
        previous = request.previous_questions.len(),
        "quiz request"
    );
    let api = api.lock().await;
    api.play_quiz(&request)
        .map(success)
        .map_err(ApiError::from_write)
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
