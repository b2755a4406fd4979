//! Quiz play: one random question at a time from a category, never repeating a
//! question the player has already seen.
//!
//! The server keeps no game state. The client sends the full list of question
//! ids it has been served with every request.
//!
//! When every question of the category has been served (or the category has
//! none) the result carries no question. Clients end the game on it.

use crate::error::Result;
use crate::model::{lenient, ClientCategoryId, Question};
use crate::store::TriviaStore;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizCategory {
    /// Zero-based client category id.
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(default, deserialize_with = "lenient::int_vec")]
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizTurn {
    pub question: Option<Question>,
}

pub fn run<S, R>(
    store: &S,
    category: ClientCategoryId,
    previous: &[i64],
    rng: &mut R,
) -> Result<QuizTurn>
where
    S: TriviaStore,
    R: Rng + ?Sized,
{
    let pool = store.questions_in_category(category.to_stored()?)?;
    let question = select_unseen(pool, previous, rng);
    debug!(
        served = previous.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "quiz turn"
    );
    Ok(QuizTurn { question })
}

/// Uniform choice among the questions of `pool` whose id is not in `previous`.
pub fn select_unseen<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<Question> = pool.into_iter().filter(|q| !seen.contains(&q.id)).collect();
    unseen.choose(rng).cloned()
}
