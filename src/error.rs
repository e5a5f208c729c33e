use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render;

/// Errors returned by repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: empty {}", .0.join(", "))]
    ValidationFailed(Vec<&'static str>),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    Internal(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => AppError::NotFound(err.to_string()),
            RepoError::ValidationFailed(_) | RepoError::InvalidOperation(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
