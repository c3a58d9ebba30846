//! Roles and the fixed role → capability table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application role of a signed-in clinician or staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SupportCoordinator,
    OccupationalTherapist,
    Viewer,
}

/// A single capability that can be checked against a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    UseAiTools,
    ManageParticipants,
    ViewAllReports,
    ManageUsers,
    ViewAuditLog,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::UseAiTools => "use_ai_tools",
            Permission::ManageParticipants => "manage_participants",
            Permission::ViewAllReports => "view_all_reports",
            Permission::ManageUsers => "manage_users",
            Permission::ViewAuditLog => "view_audit_log",
        }
    }
}

/// Fixed-size capability record for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub use_ai_tools: bool,
    pub manage_participants: bool,
    pub view_all_reports: bool,
    pub manage_users: bool,
    pub view_audit_log: bool,
}

impl Capabilities {
    pub const ALL: Self = Self {
        use_ai_tools: true,
        manage_participants: true,
        view_all_reports: true,
        manage_users: true,
        view_audit_log: true,
    };

    pub const NONE: Self = Self {
        use_ai_tools: false,
        manage_participants: false,
        view_all_reports: false,
        manage_users: false,
        view_audit_log: false,
    };

    /// Returns whether this record grants the permission.
    pub const fn allows(&self, permission: Permission) -> bool {
        match permission {
            Permission::UseAiTools => self.use_ai_tools,
            Permission::ManageParticipants => self.manage_participants,
            Permission::ViewAllReports => self.view_all_reports,
            Permission::ManageUsers => self.manage_users,
            Permission::ViewAuditLog => self.view_audit_log,
        }
    }
}

impl Role {
    /// Capability record for this role.
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            Role::Admin => Capabilities::ALL,
            Role::SupportCoordinator => Capabilities {
                use_ai_tools: true,
                manage_participants: true,
                ..Capabilities::NONE
            },
            Role::OccupationalTherapist => Capabilities {
                use_ai_tools: true,
                ..Capabilities::NONE
            },
            Role::Viewer => Capabilities::NONE,
        }
    }

    /// Returns true if the role grants the permission.
    pub const fn has_permission(&self, permission: Permission) -> bool {
        self.capabilities().allows(permission)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SupportCoordinator => "support_coordinator",
            Role::OccupationalTherapist => "occupational_therapist",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role claim does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "support_coordinator" | "sc" => Ok(Role::SupportCoordinator),
            "occupational_therapist" | "ot" => Ok(Role::OccupationalTherapist),
            "viewer" => Ok(Role::Viewer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_has_every_permission() {
        for p in [
            Permission::UseAiTools,
            Permission::ManageParticipants,
            Permission::ViewAllReports,
            Permission::ManageUsers,
            Permission::ViewAuditLog,
        ] {
            assert!(Role::Admin.has_permission(p), "admin lacks {}", p.as_str());
        }
    }

    #[test]
    fn clinicians_can_use_ai_tools_but_not_audit() {
        assert!(Role::SupportCoordinator.has_permission(Permission::UseAiTools));
        assert!(Role::OccupationalTherapist.has_permission(Permission::UseAiTools));
        assert!(!Role::SupportCoordinator.has_permission(Permission::ViewAuditLog));
        assert!(!Role::OccupationalTherapist.has_permission(Permission::ManageParticipants));
    }

    #[test]
    fn viewer_has_no_capabilities() {
        assert_eq!(Role::Viewer.capabilities(), Capabilities::NONE);
    }

    #[test]
    fn role_parses_aliases_case_insensitively() {
        assert_eq!("SC".parse::<Role>(), Ok(Role::SupportCoordinator));
        assert_eq!("ot".parse::<Role>(), Ok(Role::OccupationalTherapist));
        assert_eq!(" Admin ".parse::<Role>(), Ok(Role::Admin));
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn capabilities_serialize_camel_case() {
        let json = serde_json::to_value(Role::OccupationalTherapist.capabilities()).unwrap();
        assert_eq!(json["useAiTools"], true);
        assert_eq!(json["viewAuditLog"], false);
    }
}
