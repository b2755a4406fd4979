use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use triviaapp::error::TriviaError;

/// Errors as the client sees them. The display string is the envelope message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad Request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,

    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Read paths: an empty required result (or an id that cannot name
    /// anything) is not found, anything else is a server fault.
    pub fn from_read(err: TriviaError) -> Self {
        if err.is_client_error() {
            return ApiError::NotFound;
        }
        error!(error = %err, "read failed");
        ApiError::Internal
    }

    /// Write and quiz paths: every failure is unprocessable. The typed cause
    /// only shows up in the log.
    pub fn from_write(err: TriviaError) -> Self {
        if err.is_client_error() {
            warn!(error = %err, "request rejected");
        } else {
            error!(error = %err, "write failed");
        }
        ApiError::Unprocessable
    }

    /// Well-formed JSON of the wrong shape is unprocessable; anything else
    /// (bad syntax, wrong content type) is a bad request.
    pub fn from_json(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
            _ => ApiError::BadRequest,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
