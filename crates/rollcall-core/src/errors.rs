//! Application error type with HTTP response conversion.
//!
//! Every failure that reaches a handler is an [`AppError`]: an HTTP status
//! plus an [`anyhow::Error`] describing what went wrong. Client errors render
//! their message verbatim; server errors are logged and replaced by a generic
//! message so store internals never reach the response body.
//!
//! | Constructor | Status | Meaning |
//! |-------------|--------|---------|
//! | [`AppError::bad_request`] | 400 | malformed or missing input |
//! | [`AppError::conflict`] | 400 | uniqueness violation |
//! | [`AppError::invalid_credentials`] | 400 | login failed |
//! | [`AppError::unauthorized`] | 401 | missing or invalid token |
//! | [`AppError::forbidden`] | 403 | authenticated but not allowed |
//! | [`AppError::not_found`] | 404 | absent or hidden resource |
//! | [`AppError::internal`] | 500 | store or infrastructure failure |

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: String) -> Self {
        Self::internal(anyhow::anyhow!(message))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// Uniqueness violations share the 400 status with validation errors.
    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// The same error for an unknown email and for a wrong password.
    pub fn invalid_credentials() -> Self {
        Self::bad_request(anyhow::anyhow!(INVALID_CREDENTIALS))
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow::anyhow!(message))
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(message))
    }

    /// Message that is safe to show to the client.
    pub fn public_message(&self) -> String {
        if self.status.is_server_error() {
            INTERNAL_ERROR.to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = ?self.error, "Request failed with server error");
        }

        let body = Json(json!({
            "success": false,
            "error": self.public_message(),
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
