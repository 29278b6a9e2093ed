use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Every failed precondition terminates its request with one of these; the
/// message becomes the plain-text response body, except for mail transport
/// failures whose detail is only logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid server-side setting.
    #[error("{0}")]
    Config(String),

    /// Missing or disallowed header, rejected origin, bad content type.
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed, or claim-mismatched token. Surfaced as 400, not
    /// 401: callers are anonymous browsers, not credentialed clients.
    #[error("{0}")]
    Auth(String),

    /// Unreadable or incomplete submission body.
    #[error("{0}")]
    Unprocessable(String),

    /// Outbound mail transport failure. The detail never reaches the caller.
    #[error("Failed to send message")]
    Mail(String),

    #[error("HTTP header error: {0}")]
    HttpHeader(#[from] axum::http::header::InvalidHeaderValue),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Auth(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_)
            | AppError::Mail(_)
            | AppError::HttpHeader(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log this error at a level matching its status class.
    pub fn log(&self) {
        let status = self.status_code();
        match self {
            AppError::Mail(detail) => {
                tracing::error!(detail = %detail, "Failed to send message");
            }
            _ if status.is_server_error() => {
                tracing::error!(error = %self, status = %status.as_u16(), "Server error");
            }
            _ => {
                tracing::warn!(error = %self, status = %status.as_u16(), "Request rejected");
            }
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        AppError::Auth(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        AppError::Unprocessable(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        crate::response::formalize(self.status_code(), &self.to_string())
    }
}
