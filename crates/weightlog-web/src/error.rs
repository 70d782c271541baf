//! Maps domain `AppError` to HTTP status codes and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use weightlog_core::error::{AppError, ErrorKind};

/// Status code a failure of the given kind is reported with.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database
        | ErrorKind::Render
        | ErrorKind::Configuration
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Plain-text fallback, used when a page itself cannot be rendered.
pub fn error_response(err: AppError) -> Response {
    let status = status_for(err.kind);
    if status.is_server_error() {
        tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
    }
    (status, err.message).into_response()
}
