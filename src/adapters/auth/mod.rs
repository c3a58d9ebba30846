//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `platform_jwt` - HS256 access tokens issued by the hosted auth platform
//! - `mock` - Test implementation that doesn't require external services

mod mock;
mod platform_jwt;

pub use mock::MockSessionValidator;
pub use platform_jwt::{PlatformJwtConfig, PlatformJwtValidator};
