//! # Domain Model
//!
//! Core data types for the trivia bank: [`Question`], [`NewQuestion`] and [`Category`].
//!
//! ## Category Identifiers
//!
//! Categories carry two identities that differ by exactly one:
//!
//! - **Stored** ([`CategoryId`]): the one-based primary key in the store. Every
//!   `Question.category` is a stored id and must reference an existing category.
//! - **Client** ([`ClientCategoryId`]): the zero-based position of the category in
//!   the label list the quiz client renders (`GET /categories` returns labels only,
//!   in id order, so the client addresses them by index).
//!
//! ```text
//! client  0        1    2          ...
//! stored  1        2    3          ...
//! label   Science  Art  Geography  ...
//! ```
//!
//! The translation happens in one place: [`ClientCategoryId::to_stored`] and
//! [`CategoryId::to_client`]. Commands accept a `ClientCategoryId` and convert at
//! the boundary; nothing else adds or subtracts one.
//!
//! No endpoint currently emits client ids: responses, including
//! `GET /categories/{id}/questions`, echo the stored id. `to_client` is kept as
//! the inverse of `to_stored`.
//!
//! ## Serialized Form
//!
//! A [`Question`] serializes as `{id, question, answer, category, difficulty}` with
//! `category` holding the stored id. [`Category`] serializes as `{id, type}`.

use crate::error::{Result, TriviaError};
use serde::{Deserialize, Serialize};

/// One-based category id as kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

/// Zero-based category id as seen by the quiz client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientCategoryId(pub i64);

impl ClientCategoryId {
    pub fn to_stored(self) -> Result<CategoryId> {
        self.0.checked_add(1).map(CategoryId).ok_or_else(|| {
            TriviaError::InvalidInput(format!("Category id {} is out of range", self.0))
        })
    }
}

impl CategoryId {
    pub fn to_client(self) -> Result<ClientCategoryId> {
        self.0.checked_sub(1).map(ClientCategoryId).ok_or_else(|| {
            TriviaError::InvalidInput(format!("Category id {} is out of range", self.0))
        })
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

/// A question that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Labels seeded by `trivia init`, in stored id order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Serde helpers for request fields the quiz client sends either as JSON
/// numbers or as numeric strings (`"difficulty": "1"`).
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    impl IntOrString {
        fn into_int<E: serde::de::Error>(self) -> Result<i64, E> {
            match self {
                IntOrString::Int(n) => Ok(n),
                IntOrString::Str(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| E::custom(format!("expected an integer, got {:?}", s))),
            }
        }
    }

    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        IntOrString::deserialize(deserializer)?.into_int()
    }

    pub fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        match Option::<IntOrString>::deserialize(deserializer)? {
            Some(v) => v.into_int().map(Some),
            None => Ok(None),
        }
    }

    pub fn int_vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
        Vec::<IntOrString>::deserialize(deserializer)?
            .into_iter()
            .map(IntOrString::into_int::<D::Error>)
            .collect()
    }
}
