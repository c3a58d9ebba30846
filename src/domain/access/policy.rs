//! Access policy: resolves a user's role and checks permissions.

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode};

use super::role::{Permission, Role};

/// Immutable access policy built once from configuration at startup.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    admin_emails: Vec<String>,
    default_role: Role,
}

impl AccessPolicy {
    /// Creates a policy from the configured admin e-mail list and default role.
    pub fn new<I, S>(admin_emails: I, default_role: Role) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let admin_emails = admin_emails
            .into_iter()
            .map(|e| e.as_ref().trim().to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            admin_emails,
            default_role,
        }
    }

    /// Returns true if the e-mail address is on the admin list.
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim().to_ascii_lowercase();
        self.admin_emails.iter().any(|e| *e == email)
    }

    /// Resolves the effective role for a user.
    ///
    /// Admin e-mails win over any role claim; an absent or unknown claim
    /// falls back to the default role.
    pub fn resolve_role(&self, user: &AuthenticatedUser) -> Role {
        if self.is_admin_email(&user.email) {
            return Role::Admin;
        }
        user.role
            .as_deref()
            .and_then(|r| r.parse().ok())
            .unwrap_or(self.default_role)
    }

    pub fn has_permission(&self, user: &AuthenticatedUser, permission: Permission) -> bool {
        self.resolve_role(user).has_permission(permission)
    }

    /// Returns `Forbidden` when the user's role lacks the permission.
    pub fn authorize(
        &self,
        user: &AuthenticatedUser,
        permission: Permission,
    ) -> Result<Role, DomainError> {
        let role = self.resolve_role(user);
        if role.has_permission(permission) {
            Ok(role)
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "You do not have permission to perform this action",
            )
            .with_detail("permission", permission.as_str())
            .with_detail("role", role.as_str()))
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(Vec::<String>::new(), Role::SupportCoordinator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn user(email: &str, role: Option<&str>) -> AuthenticatedUser {
        let u = AuthenticatedUser::new(UserId::new("u-1").unwrap(), email, None);
        match role {
            Some(r) => u.with_role(r),
            None => u,
        }
    }

    #[test]
    fn admin_email_overrides_role_claim() {
        let policy = AccessPolicy::new(["Boss@Clinic.example"], Role::Viewer);
        let u = user("boss@clinic.example", Some("viewer"));
        assert_eq!(policy.resolve_role(&u), Role::Admin);
    }

    #[test]
    fn role_claim_is_used_when_not_admin() {
        let policy = AccessPolicy::new(["boss@clinic.example"], Role::Viewer);
        assert_eq!(
            policy.resolve_role(&user("ot@clinic.example", Some("ot"))),
            Role::OccupationalTherapist
        );
    }

    #[test]
    fn unknown_or_missing_claim_uses_default_role() {
        let policy = AccessPolicy::new(Vec::<String>::new(), Role::Viewer);
        assert_eq!(policy.resolve_role(&user("a@b.c", None)), Role::Viewer);
        assert_eq!(policy.resolve_role(&user("a@b.c", Some("wizard"))), Role::Viewer);
    }

    #[test]
    fn authorize_denies_with_forbidden_code() {
        let policy = AccessPolicy::new(Vec::<String>::new(), Role::Viewer);
        let err = policy
            .authorize(&user("a@b.c", None), Permission::UseAiTools)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(err.details.get("permission").map(String::as_str), Some("use_ai_tools"));
    }

    #[test]
    fn authorize_returns_role_when_granted() {
        let policy = AccessPolicy::default();
        let role = policy
            .authorize(&user("sc@b.c", None), Permission::UseAiTools)
            .unwrap();
        assert_eq!(role, Role::SupportCoordinator);
    }
}
