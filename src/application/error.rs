//! Error taxonomy for the application layer.
//!
//! Every failure a handler can produce is converted into a [`HandlerError`]
//! at the handler boundary; the HTTP adapter maps each variant to a status.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::AIError;

/// Failure of a request handler.
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    /// Malformed or insufficient input.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No valid identity on the request.
    #[error("Authentication required")]
    Unauthenticated,

    /// Identity lacks the required capability.
    #[error("{0}")]
    Forbidden(String),

    /// A required server secret or setting is missing.
    #[error("{0}")]
    Configuration(String),

    /// The AI adapter (or another collaborator) failed. `status` is the
    /// adapter-provided HTTP status, if any.
    #[error("{message}")]
    Adapter { message: String, status: Option<u16> },

    /// Anything else. The message is internal detail.
    #[error("{0}")]
    Unexpected(String),
}

impl HandlerError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Validation(_) => 400,
            HandlerError::Unauthenticated => 401,
            HandlerError::Forbidden(_) => 403,
            HandlerError::Configuration(_) => 500,
            HandlerError::Adapter { status, .. } => status
                .filter(|s| (400..=599).contains(s))
                .unwrap_or(500),
            HandlerError::Unexpected(_) => 500,
        }
    }

    /// Stable machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::Validation(_) => "validation",
            HandlerError::Unauthenticated => "unauthenticated",
            HandlerError::Forbidden(_) => "forbidden",
            HandlerError::Configuration(_) => "configuration",
            HandlerError::Adapter { .. } => "adapter",
            HandlerError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<AIError> for HandlerError {
    fn from(err: AIError) -> Self {
        HandlerError::Adapter {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for HandlerError {
    fn from(err: DomainError) -> Self {
        match err.code() {
            ErrorCode::ValidationFailed => {
                HandlerError::Validation(ValidationError::rule(err.message()))
            }
            ErrorCode::Unauthorized => HandlerError::Unauthenticated,
            ErrorCode::Forbidden => HandlerError::Forbidden(err.message().to_string()),
            ErrorCode::ConfigurationError => HandlerError::Configuration(err.message().to_string()),
            ErrorCode::AIProviderError => HandlerError::Adapter {
                message: err.message().to_string(),
                status: None,
            },
            ErrorCode::NotFound | ErrorCode::DatabaseError | ErrorCode::InternalError => {
                HandlerError::Unexpected(err.to_string())
            }
        }
    }
}
