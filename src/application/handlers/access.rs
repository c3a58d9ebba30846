//! Caller's effective role and capabilities.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::access::{AccessPolicy, Capabilities, Role};
use crate::domain::foundation::AuthenticatedUser;

/// Role and capability record for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub is_admin: bool,
    pub capabilities: Capabilities,
}

pub struct PermissionsHandler {
    policy: Arc<AccessPolicy>,
}

impl PermissionsHandler {
    pub fn new(policy: Arc<AccessPolicy>) -> Self {
        Self { policy }
    }

    pub fn handle(&self, user: &AuthenticatedUser) -> UserPermissions {
        let role = self.policy.resolve_role(user);
        UserPermissions {
            user_id: user.id.to_string(),
            email: user.email.clone(),
            role,
            is_admin: role == Role::Admin,
            capabilities: role.capabilities(),
        }
    }
}
