//! In-memory activity stores.
//!
//! Used when no database is configured and in tests. State is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::activity::{AuditEntry, Presence, PresenceStatus};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{AuditLog, PresenceStore};

/// Presence keyed by user.
#[derive(Debug, Default)]
pub struct InMemoryPresenceStore {
    entries: RwLock<HashMap<UserId, Presence>>,
}

impl InMemoryPresenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current presence for a user, if any.
    pub async fn get(&self, user_id: &UserId) -> Option<Presence> {
        self.entries.read().await.get(user_id).cloned()
    }
}

#[async_trait]
impl PresenceStore for InMemoryPresenceStore {
    async fn upsert(&self, presence: Presence) -> Result<(), DomainError> {
        self.entries
            .write()
            .await
            .insert(presence.user_id.clone(), presence);
        Ok(())
    }

    async fn mark_offline(&self, user_id: &UserId, at: Timestamp) -> Result<(), DomainError> {
        if let Some(presence) = self.entries.write().await.get_mut(user_id) {
            presence.status = PresenceStatus::Offline;
            presence.last_seen = at;
        }
        Ok(())
    }

    async fn list_active(&self, since: Timestamp) -> Result<Vec<Presence>, DomainError> {
        let mut active: Vec<Presence> = self
            .entries
            .read()
            .await
            .values()
            .filter(|p| p.status != PresenceStatus::Offline && !p.last_seen.is_before(&since))
            .cloned()
            .collect();
        active.sort_by(|a, b| b.last_seen.cmp(&a.last_seen));
        Ok(active)
    }
}

/// Append-only audit log held in a vector.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn append(&self, entry: AuditEntry) -> Result<(), DomainError> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<AuditEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AuthenticatedUser;

    fn user(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), format!("{id}@clinic.example"), None)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Presence
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn upsert_replaces_previous_presence() {
        let store = InMemoryPresenceStore::new();
        let now = Timestamp::now();

        store
            .upsert(Presence::seen(&user("a"), PresenceStatus::Online, now.minus_secs(30)))
            .await
            .unwrap();
        store
            .upsert(Presence::seen(&user("a"), PresenceStatus::Away, now))
            .await
            .unwrap();

        let p = store.get(&UserId::new("a").unwrap()).await.unwrap();
        assert_eq!(p.status, PresenceStatus::Away);
        assert_eq!(p.last_seen, now);
    }

    #[tokio::test]
    async fn list_active_filters_stale_and_offline_newest_first() {
        let store = InMemoryPresenceStore::new();
        let now = Timestamp::now();

        store
            .upsert(Presence::seen(&user("old"), PresenceStatus::Online, now.minus_secs(600)))
            .await
            .unwrap();
        store
            .upsert(Presence::seen(&user("recent"), PresenceStatus::Online, now.minus_secs(60)))
            .await
            .unwrap();
        store
            .upsert(Presence::seen(&user("newest"), PresenceStatus::Away, now))
            .await
            .unwrap();
        store
            .upsert(Presence::seen(&user("gone"), PresenceStatus::Online, now))
            .await
            .unwrap();
        store
            .mark_offline(&UserId::new("gone").unwrap(), now)
            .await
            .unwrap();

        let active = store.list_active(now.minus_secs(300)).await.unwrap();
        let ids: Vec<&str> = active.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "recent"]);
    }

    #[tokio::test]
    async fn mark_offline_for_unknown_user_is_noop() {
        let store = InMemoryPresenceStore::new();
        store
            .mark_offline(&UserId::new("nobody").unwrap(), Timestamp::now())
            .await
            .unwrap();
        assert!(store.get(&UserId::new("nobody").unwrap()).await.is_none());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Audit log
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn recent_returns_newest_first_up_to_limit() {
        let log = InMemoryAuditLog::new();
        for feature in ["at-justification", "quality-checker", "case-notes"] {
            log.append(AuditEntry::record(&user("a"), feature, "m"))
                .await
                .unwrap();
        }

        let recent = log.recent(2).await.unwrap();

        assert_eq!(log.len().await, 3);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].feature, "case-notes");
        assert_eq!(recent[1].feature, "quality-checker");
    }
}
