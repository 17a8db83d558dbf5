use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use glocation_core::error::CoreError;
use glocation_summarizer::SummarizerError;
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned for every missing resource.
pub const NOT_FOUND_MESSAGE: &str = "No encontrado";

/// Message returned in place of sanitized internal failures.
pub const INTERNAL_MESSAGE: &str = "Ocurrió un error interno";

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason.
    #[schema(example = "No encontrado")]
    pub error: String,
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `glocation_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx that is not a constraint violation.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a missing project.
    pub fn project_not_found(id: glocation_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        })
    }
}

/// Constraint violations become [`CoreError::Validation`] carrying the
/// database's reason. Every other sqlx error stays [`AppError::Database`].
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match constraint_violation(&err) {
            Some(reason) => {
                tracing::debug!(error = %reason, "Write rejected by database constraint");
                AppError::Core(CoreError::Validation(reason))
            }
            None => AppError::Database(err),
        }
    }
}

impl From<SummarizerError> for AppError {
    fn from(err: SummarizerError) -> Self {
        AppError::Core(CoreError::Upstream(err.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Upstream(msg) => {
                    tracing::error!(error = %msg, "Summarization request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(ErrorResponse { error: message })).into_response()
    }
}

/// SQLSTATE codes raised when a write breaks a column constraint.
///
/// - `23502` not-null violation
/// - `23514` check violation
/// - `22P02` invalid text representation (unknown enum label)
/// - `22001` value too long for the column
/// - `22007` / `22008` invalid or out-of-range datetime
const VALIDATION_SQLSTATES: [&str; 6] = ["23502", "23514", "22P02", "22001", "22007", "22008"];

/// The database's reason when `err` is a constraint violation.
fn constraint_violation(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err)
            if db_err
                .code()
                .is_some_and(|code| VALIDATION_SQLSTATES.iter().any(|s| *s == code)) =>
        {
            Some(db_err.message().to_string())
        }
        _ => None,
    }
}

/// Classify a non-constraint sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
