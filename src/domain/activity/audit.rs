//! Audit trail of AI generations.

use serde::Serialize;

use crate::domain::foundation::{AuditEntryId, AuthenticatedUser, Timestamp, UserId};

pub const DEFAULT_AUDIT_LIMIT: u32 = 50;
pub const MAX_AUDIT_LIMIT: u32 = 500;

/// One successful AI generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub user_id: UserId,
    pub user_email: String,
    pub feature: String,
    pub model: String,
    pub created_at: Timestamp,
}

impl AuditEntry {
    pub fn record(user: &AuthenticatedUser, feature: &str, model: &str) -> Self {
        Self {
            id: AuditEntryId::new(),
            user_id: user.id.clone(),
            user_email: user.email.clone(),
            feature: feature.to_string(),
            model: model.to_string(),
            created_at: Timestamp::now(),
        }
    }
}

/// Resolves the page size for an audit listing: default when absent,
/// clamped to `1..=MAX_AUDIT_LIMIT`.
pub fn audit_limit(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_AUDIT_LIMIT)
        .clamp(1, MAX_AUDIT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(audit_limit(None), 50);
        assert_eq!(audit_limit(Some(0)), 1);
        assert_eq!(audit_limit(Some(10_000)), 500);
        assert_eq!(audit_limit(Some(20)), 20);
    }

    #[test]
    fn record_copies_user_identity() {
        let user = AuthenticatedUser::new(UserId::new("u-9").unwrap(), "ot@clinic.example", None);
        let entry = AuditEntry::record(&user, "quality-checker", "claude-sonnet");
        assert_eq!(entry.user_id.as_str(), "u-9");
        assert_eq!(entry.feature, "quality-checker");
    }
}
