//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Variants split into two classes. Validation and authentication failures
//! are recoverable: handlers turn them into redirects. Collaborator
//! failures (session, storage, query) fail the request with a 5xx
//! response but never take the process down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::infra::session_store::SessionError;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

#[derive(Debug, Error)]
pub enum BlogError {
    /// A required form field was empty
    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    /// User name already registered
    #[error("User name already exists")]
    UserNameTaken,

    /// No user matches the submitted name and password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session carries no usable identity
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Session cookie could not be read or written
    #[error("Session unavailable: {0}")]
    SessionUnavailable(#[from] SessionError),

    /// Storage could not be opened or prepared
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    /// A query or insert failed on an open handle
    #[error("Query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Recoverable errors are answered with a redirect, not an error page
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BlogError::EmptyField(_)
                | BlogError::UserNameTaken
                | BlogError::InvalidCredentials
                | BlogError::NotAuthenticated
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::EmptyField(_) => ErrorKind::BadRequest,
            BlogError::UserNameTaken => ErrorKind::Conflict,
            BlogError::InvalidCredentials | BlogError::NotAuthenticated => ErrorKind::Unauthorized,
            BlogError::StorageUnavailable(_) => ErrorKind::ServiceUnavailable,
            BlogError::SessionUnavailable(_)
            | BlogError::QueryFailed(_)
            | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, keeping this error as the source
    ///
    /// Server-side failures get a generic message; details stay in the log.
    pub fn into_app_error(self) -> AppError {
        let app_err = match &self {
            BlogError::EmptyField(_) => AppError::bad_request(self.to_string()),
            BlogError::UserNameTaken => AppError::conflict(self.to_string()),
            BlogError::InvalidCredentials | BlogError::NotAuthenticated => {
                AppError::unauthorized(self.to_string())
            }
            BlogError::SessionUnavailable(_) => {
                AppError::internal("Session could not be established")
            }
            BlogError::StorageUnavailable(_) => {
                AppError::service_unavailable("Storage unavailable")
            }
            BlogError::QueryFailed(_) | BlogError::Internal(_) => {
                AppError::internal("Request failed")
            }
        };
        app_err.with_source(self)
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            BlogError::SessionUnavailable(e) => {
                tracing::error!(error = %e, "Session unavailable");
            }
            BlogError::StorageUnavailable(e) => {
                tracing::error!(error = %e, "Storage unavailable");
            }
            BlogError::QueryFailed(e) => {
                tracing::error!(error = %e, "Query failed");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Request rejected");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
