use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CoreError;

use crate::views;

/// Prefix of every write-path failure message.
const WRITE_FAILURE_PREFIX: &str = "I'm sorry, but we have encountered the following error";

/// Application-level error type for HTML handlers.
///
/// Each variant picks the page the failure is rendered with; the message is
/// shown to the user verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rendered with the not-found page (404).
    #[error("{0}")]
    NotFound(String),

    /// Rendered with the generic error page, headed by `status`.
    #[error("{message}")]
    Failed { status: StatusCode, message: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Failure of a read path: shown on the not-found page.
    pub fn read(err: CoreError) -> Self {
        tracing::error!(error = %err, "Read request failed");
        AppError::NotFound(err.to_string())
    }

    /// Failure of a write path: shown on the generic error page with a
    /// status matching the error kind.
    pub fn write(err: CoreError) -> Self {
        tracing::error!(error = %err, "Write request failed");
        let status = match &err {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::Connectivity(_) | CoreError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError::Failed {
            status,
            message: format!("{WRITE_FAILURE_PREFIX}: {err}"),
        }
    }

    /// A write path addressed to an id that cannot exist.
    pub fn write_missing_project(raw_id: &str) -> Self {
        tracing::error!(id = %raw_id, "Write request for malformed project id");
        AppError::Failed {
            status: StatusCode::NOT_FOUND,
            message: format!("{WRITE_FAILURE_PREFIX}: Project not found (id {raw_id})"),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Failed { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::NotFound(message) => (status, views::not_found(&message)).into_response(),
            AppError::Failed { message, .. } => {
                (status, views::server_error(status, &message)).into_response()
            }
        }
    }
}
