//! # Command Layer
//!
//! This module contains the **core business logic** of the trivia API. Each
//! command lives in its own submodule and implements plain Rust functions over a
//! [`TriviaStore`](crate::store::TriviaStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Translate client category ids to stored ids (via [`crate::model`])
//! - Read from and write to the store
//! - Paginate listings (via [`crate::pagination`])
//! - Return structured, serializable results
//!
//! ## What Commands Do NOT Do
//!
//! - **HTTP**: no status codes, no envelopes, no request parsing beyond serde
//!   payload types
//! - **Error demotion**: a missing question stays `QuestionNotFound`; deciding that
//!   a failed delete is a 422 belongs to the HTTP layer
//!
//! ## Structured Returns
//!
//! Every result type serializes to the JSON body of its endpoint minus the
//! `success` flag, which the HTTP layer adds. Field names (including the
//! camelCase `totalQuestions` of create and search) are part of the wire contract
//! the quiz client reads.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` fixtures and cover every branch and edge case.
//!
//! ## Command Modules
//!
//! - [`categories`]: List categories and questions of one category
//! - [`list`]: Paginated listing of all questions
//! - [`search`]: Case-insensitive substring search
//! - [`create`]: Add a question
//! - [`delete`]: Remove a question
//! - [`quiz`]: Pick the next unseen quiz question
//! - [`helpers`]: Shared listing utilities

pub mod categories;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod quiz;
pub mod search;

pub use categories::{CategoryListing, CategoryQuestions};
pub use create::{Created, QuestionInput};
pub use delete::Deleted;
pub use list::QuestionPage;
pub use quiz::{QuizCategory, QuizRequest, QuizTurn};
pub use search::SearchResults;
