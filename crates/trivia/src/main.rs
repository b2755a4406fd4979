//! # Trivia Server
//!
//! The binary is intentionally thin: argument parsing and dispatch live in
//! `src/cli/`, the HTTP surface in `src/server/`, and this file only starts the
//! runtime and turns errors into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/triviaapp/`: transport-agnostic library (store, commands, API facade)
//! - `crates/trivia/`: this binary, the HTTP server and its CLI
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (src/cli/)                                             │
//! │  - clap parsing, config overrides, logging setup            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP (src/server/)                                         │
//! │  - axum router, JSON envelopes, CORS, graceful shutdown     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  triviaapp::api::TriviaApi                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Router (`src/server/routes.rs`)**: requests go through the real router
//!   with `tower::ServiceExt::oneshot` against in-memory store fixtures.
//! - **Binary (`tests/`)**: `assert_cmd` runs `trivia init` end to end.

mod cli;
mod server;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
