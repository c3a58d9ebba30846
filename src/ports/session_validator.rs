//! Access-token validation port.
//!
//! Every `/api` request carries a bearer token issued by the hosted auth
//! platform. The auth middleware hands the raw token to a
//! [`SessionValidator`] and either gets the caller's identity back or
//! answers 401.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns a bearer token into the authenticated caller.
///
/// Implementations verify the HS256 signature against the shared secret
/// and check `aud` and `exp` (plus `iss` when one is configured). The role
/// claim is read from `app_metadata.role` only; `user_metadata` is
/// user-editable and never trusted for it. The claim is passed through
/// as-is, and resolving it to a [`Role`](crate::domain::access::Role) is
/// the access policy's job.
///
/// Error mapping used by the middleware:
/// - `TokenExpired` renders 401 "Token expired"
/// - `InvalidToken` renders 401 "Invalid token"
/// - `ServiceUnavailable` renders the generic 500
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw JWT without the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
