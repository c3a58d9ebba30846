//! Access control configuration

use serde::Deserialize;

use crate::domain::access::{AccessPolicy, Role};

use super::error::ValidationError;

/// Role resolution settings
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// E-mail addresses granted the admin role (comma-separated)
    pub admin_emails: Option<String>,

    /// Role for users whose token carries no recognised role claim
    #[serde(default = "default_role")]
    pub default_role: String,
}

impl AccessConfig {
    /// Admin e-mails as a vector
    pub fn admin_emails_list(&self) -> Vec<String> {
        self.admin_emails
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parsed default role
    pub fn default_role(&self) -> Result<Role, ValidationError> {
        self.default_role
            .parse()
            .map_err(|_| ValidationError::UnknownDefaultRole(self.default_role.clone()))
    }

    /// Builds the access policy used by every handler
    pub fn policy(&self) -> Result<AccessPolicy, ValidationError> {
        Ok(AccessPolicy::new(
            self.admin_emails_list(),
            self.default_role()?,
        ))
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.default_role().map(|_| ())
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin_emails: None,
            default_role: default_role(),
        }
    }
}

fn default_role() -> String {
    Role::SupportCoordinator.as_str().to_string()
}
