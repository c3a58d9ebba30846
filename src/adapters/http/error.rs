//! Error responses for the HTTP adapter.
//!
//! Every failure leaves the service as `{ "error": "...", "details"?: "..." }`.
//! `details` carries internal context and is only attached outside
//! production.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::HandlerError;

/// Message shown for failures whose cause must not leak to clients.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Wire body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                details: None,
            },
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn unauthorized(error: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error)
    }

    /// Generic 500 with optional internal detail.
    pub fn internal(details: Option<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).with_details(details)
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.body.details = details;
        self
    }

    /// Converts a handler failure. Unexpected errors are replaced by the
    /// generic message; their text survives only as `details` when
    /// `expose_details` is set.
    pub fn from_handler(err: HandlerError, expose_details: bool) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(kind = err.kind(), status = status.as_u16(), error = %err, "request failed");
        } else {
            tracing::warn!(kind = err.kind(), status = status.as_u16(), error = %err, "request rejected");
        }

        match err {
            HandlerError::Unexpected(message) => {
                Self::internal(expose_details.then_some(message))
            }
            other => Self::new(status, other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
