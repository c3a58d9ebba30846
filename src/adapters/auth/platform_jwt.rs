//! HS256 JWT adapter for access tokens issued by the hosted auth platform.
//!
//! The platform signs access tokens with a shared secret. This adapter:
//!
//! 1. Verifies the HS256 signature against the configured secret
//! 2. Validates audience, expiry and (optionally) issuer claims
//! 3. Maps `sub`, `email`, `user_metadata.full_name` and `app_metadata.role`
//!    to the domain `AuthenticatedUser`
//!
//! # Example
//!
//! ```ignore
//! let config = PlatformJwtConfig::new(secret, "authenticated")
//!     .with_issuer("https://project.example.co/auth/v1");
//!
//! let validator = PlatformJwtValidator::new(config);
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the platform JWT adapter.
#[derive(Debug, Clone)]
pub struct PlatformJwtConfig {
    /// Shared HS256 signing secret.
    secret: Secret<String>,

    /// Expected audience claim.
    pub audience: String,

    /// Expected issuer; not checked when absent.
    pub issuer: Option<String>,

    /// Clock skew tolerance in seconds.
    pub leeway_secs: u64,
}

impl PlatformJwtConfig {
    /// Create a new configuration with required fields.
    pub fn new(secret: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            audience: audience.into(),
            issuer: None,
            leeway_secs: 30,
        }
    }

    /// Require a specific issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set clock skew tolerance.
    pub fn with_leeway(mut self, secs: u64) -> Self {
        self.leeway_secs = secs;
        self
    }
}

/// Claims carried by platform access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct PlatformClaims {
    sub: String,

    exp: i64,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    user_metadata: UserMetadata,

    #[serde(default)]
    app_metadata: AppMetadata,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,

    #[serde(default)]
    name: Option<String>,
}

/// Server-controlled metadata; only this is trusted for the role claim.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AppMetadata {
    #[serde(default)]
    role: Option<String>,
}

/// Session validator for platform-issued HS256 access tokens.
pub struct PlatformJwtValidator {
    config: PlatformJwtConfig,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl PlatformJwtValidator {
    /// Create a new validator.
    pub fn new(config: PlatformJwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation.leeway = config.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            config,
            decoding_key,
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<PlatformClaims, AuthError> {
        decode::<PlatformClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for PlatformJwtValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let email = claims.email.filter(|e| !e.trim().is_empty()).ok_or_else(|| {
            tracing::warn!("Token missing email claim");
            AuthError::InvalidToken
        })?;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in token");
            AuthError::InvalidToken
        })?;

        let display_name = claims.user_metadata.full_name.or(claims.user_metadata.name);
        let user = AuthenticatedUser::new(user_id, email, display_name);

        Ok(match claims.app_metadata.role {
            Some(role) => user.with_role(role),
            None => user,
        })
    }
}

impl std::fmt::Debug for PlatformJwtValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformJwtValidator")
            .field("audience", &self.config.audience)
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}
