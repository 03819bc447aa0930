use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Error returned by handlers, services and extractors: an HTTP status
/// plus the underlying cause.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new(status: StatusCode, err: impl Into<Error>) -> Self {
        Self { status, error: err.into() }
    }

    pub fn bad_request(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn forbidden(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn unprocessable(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn internal(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The request log only sees the status; the cause chain is logged
        // here so 500s stay diagnosable without leaking details to the
        // client.
        if self.status.is_server_error() {
            error!(cause = ?self.error, "Internal error");
        }

        let body = json!({ "error": self.error.to_string() });
        (self.status, Json(body)).into_response()
    }
}

/// Lets `?` convert any error into a 500. Domain failures that deserve a
/// different status go through the constructors above instead.
impl<E: Into<Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
