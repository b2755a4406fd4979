//! # Trivia Architecture
//!
//! `triviaapp` is the **transport-agnostic core** of the trivia API: a bank of
//! questions grouped into categories, paginated listings, search, and a quiz
//! game that serves random unseen questions. The HTTP server in the `trivia`
//! crate is one client of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (trivia crate: server/)                         │
//! │  - Routes, JSON envelopes, status codes, CORS               │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Decides search vs create, supplies the random source     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Category id translation, pagination, quiz selection      │
//! │  - Typed errors, serializable results                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TriviaStore trait                               │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Category Ids
//!
//! Clients count categories from zero, the store counts from one. See
//! [`model`] for the single place where the two meet.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `InMemoryStore` fixtures.
//! 2. **Store**: behavior tests for both implementations, including foreign key
//!    enforcement in SQLite.
//! 3. **API**: dispatch tests (search vs create, request field mapping).
//! 4. **HTTP** (in the `trivia` crate): status codes and envelopes through the
//!    real router.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each endpoint
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types and category id conversion
//! - [`pagination`]: Fixed-size paging of listings
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod store;

#[cfg(test)]
pub mod test_utils;
