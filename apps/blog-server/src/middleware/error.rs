//! Error handling - failures become HTML error pages.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};

use blog_core::error::{DomainError, RepoError};

use crate::templates;

/// Application-level error type rendered as an HTML page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (title, message) = match self {
            AppError::NotFound(detail) => {
                tracing::debug!(detail = %detail, "Not found");
                ("Not Found", "The requested page does not exist.")
            }
            AppError::BadRequest(detail) => {
                tracing::debug!(detail = %detail, "Bad request");
                ("Bad Request", "The request could not be understood.")
            }
            AppError::MethodNotAllowed => (
                "Method Not Allowed",
                "This page does not accept that request method.",
            ),
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                (
                    "Server Error",
                    "Something went wrong on our side. Please try again later.",
                )
            }
        };

        let status = self.status_code();
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(templates::error::page(status.as_u16(), title, message).into_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, key } => {
                AppError::NotFound(format!("{entity_type} {key}"))
            }
            DomainError::Validation(msg) | DomainError::Duplicate(msg) => AppError::BadRequest(msg),
            DomainError::Repo(err) => err.into(),
            DomainError::Mail(err) => AppError::Internal(format!("mail delivery failed: {err}")),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
