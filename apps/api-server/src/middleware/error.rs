//! Error handling - maps service failures to RFC 7807 responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use quill_core::error::DomainError;
use quill_shared::ErrorResponse;

/// Handler-level error: a thin wrapper choosing status codes for the
/// domain taxonomy. NotFound and Forbidden stay distinct; existence is
/// always decided before ownership in the services.
#[derive(Debug)]
pub struct AppError(pub DomainError);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Forbidden => StatusCode::FORBIDDEN,
            DomainError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match &self.0 {
            DomainError::Validation(msg) => ErrorResponse::bad_request(msg.clone()),
            DomainError::NotFound { .. } => ErrorResponse::not_found(self.0.to_string()),
            DomainError::Forbidden => ErrorResponse::forbidden(),
            DomainError::Unauthenticated(msg) => {
                ErrorResponse::unauthorized().with_detail(msg.clone())
            }
            DomainError::Conflict(msg) => ErrorResponse::conflict(msg.clone()),
            DomainError::Internal(msg) => {
                // Log the detail, never leak it.
                tracing::error!("Internal error: {msg}");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
