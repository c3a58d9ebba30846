//! Authentication configuration
//!
//! Sessions live on the hosted auth platform; this service only verifies the
//! HS256 access tokens it issues.

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Access-token verification settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared JWT signing secret of the auth platform
    #[serde(default)]
    pub jwt_secret: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Expected `iss` claim; not checked when unset
    pub issuer: Option<String>,

    /// Allowed clock skew in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production the secret must be at least 32 characters and the
    /// issuer, when set, must use HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.audience.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }

        if *environment == Environment::Production {
            if self.jwt_secret.len() < 32 {
                return Err(ValidationError::WeakJwtSecret);
            }
            if self
                .issuer
                .as_deref()
                .is_some_and(|iss| !iss.starts_with("https://"))
            {
                return Err(ValidationError::IssuerMustBeHttps);
            }
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            audience: default_audience(),
            issuer: None,
            leeway_secs: default_leeway(),
        }
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}

fn default_leeway() -> u64 {
    30
}
