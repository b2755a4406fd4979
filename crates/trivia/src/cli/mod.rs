//! # CLI
//!
//! The binary has two jobs: prepare a database (`trivia init`) and serve it
//! (`trivia serve`). Both read the layered [`TriviaConfig`] first and then let
//! command line flags override it.
//!
//! [`TriviaConfig`]: triviaapp::config::TriviaConfig
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Logging setup, config overrides and dispatch

mod commands;
pub mod setup;

pub use commands::run;
