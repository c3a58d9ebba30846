//! Foundation module - shared primitives for the domain layer.

mod auth;
mod errors;
mod ids;
mod percentage;
mod text;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AuditEntryId, UserId};
pub use percentage::Percentage;
pub use text::{optional_text, required_text, text_list};
pub use timestamp::Timestamp;
