use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sciday_core::error::CoreError;
use sciday_db::repositories::SubmissionWriteError;
use serde_json::json;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{error, code}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sciday_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage operation failed. `message` is safe to show the client;
    /// `source` is only logged.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The route exists but not for this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matched the request path.
    #[error("Not found")]
    RouteNotFound,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter that tags a sqlx error with a client-facing
    /// message.
    pub fn storage(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Storage { message, source }
    }
}

impl From<SubmissionWriteError> for AppError {
    fn from(err: SubmissionWriteError) -> Self {
        match err {
            SubmissionWriteError::Student(source) => AppError::Storage {
                message: "Failed to save student data",
                source,
            },
            SubmissionWriteError::Registration(source) | SubmissionWriteError::Transaction(source) => {
                AppError::Storage {
                    message: "Failed to create registration",
                    source,
                }
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, %id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
                CoreError::MissingField(field) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Missing required field: {field}"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Storage errors ---
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    (*message).to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not allowed".to_string(),
            ),
            AppError::RouteNotFound => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Not found".to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
