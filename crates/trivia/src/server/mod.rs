//! # HTTP Surface
//!
//! The axum router over a shared [`TriviaApi`]. Every successful response is a
//! JSON object with `success: true` merged with the command result; every
//! failure is the [`ApiError`] envelope.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/categories` | [`routes::list_categories`] |
//! | GET | `/questions?page=N` | [`routes::list_questions`] |
//! | POST | `/questions?page=N` | [`routes::submit_questions`] (search or create) |
//! | DELETE | `/questions/{id}?page=N` | [`routes::delete_question`] |
//! | GET | `/categories/{id}/questions` | [`routes::category_questions`] |
//! | POST | `/quizzes` | [`routes::play_quiz`] |
//!
//! Requests are serialized through one async mutex, so a create or delete is
//! fully visible to the next request.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, post},
    Router,
};
use tokio::{net::TcpListener, signal, sync::Mutex};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use triviaapp::api::TriviaApi;
use triviaapp::config::TriviaConfig;
use triviaapp::store::sqlite::SqliteStore;
use triviaapp::store::TriviaStore;

pub mod error;
pub mod routes;

pub use error::ApiError;

/// Handler state: the API facade behind an async mutex.
pub type AppState<S> = Arc<Mutex<TriviaApi<S>>>;

pub fn router<S>(api: TriviaApi<S>) -> Router
where
    S: TriviaStore + Send + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    Router::new()
        .route(
            "/categories",
            get(routes::list_categories::<S>).fallback(routes::method_not_allowed),
        )
        .route(
            "/questions",
            get(routes::list_questions::<S>)
                .post(routes::submit_questions::<S>)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/questions/{id}",
            delete(routes::delete_question::<S>).fallback(routes::method_not_allowed),
        )
        .route(
            "/categories/{id}/questions",
            get(routes::category_questions::<S>).fallback(routes::method_not_allowed),
        )
        .route(
            "/quizzes",
            post(routes::play_quiz::<S>).fallback(routes::method_not_allowed),
        )
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(Mutex::new(api)))
}

/// Opens the configured database and serves until Ctrl+C or SIGTERM.
pub async fn start_server(config: &TriviaConfig) -> anyhow::Result<()> {
    info!(database = %config.database.display(), "Opening store...");
    let store = SqliteStore::open(&config.database)?;
    let app = router(TriviaApi::new(store));

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
