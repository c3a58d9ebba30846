//! Presence and audit handlers.

use std::sync::Arc;

use crate::application::HandlerError;
use crate::domain::access::{AccessPolicy, Permission};
use crate::domain::activity::{
    audit_limit, AuditEntry, Presence, PresenceStatus, ACTIVE_WINDOW_SECS,
};
use crate::domain::foundation::{AuthenticatedUser, Timestamp};
use crate::ports::{AuditLog, PresenceStore};

/// Heartbeat, sign-out and "who is online" queries.
pub struct PresenceHandler {
    store: Arc<dyn PresenceStore>,
    policy: Arc<AccessPolicy>,
}

impl PresenceHandler {
    pub fn new(store: Arc<dyn PresenceStore>, policy: Arc<AccessPolicy>) -> Self {
        Self { store, policy }
    }

    /// Records that the caller is online (or away) now.
    pub async fn heartbeat(
        &self,
        user: &AuthenticatedUser,
        status: Option<PresenceStatus>,
    ) -> Result<Presence, HandlerError> {
        let status = PresenceStatus::for_heartbeat(status)?;
        let presence = Presence::seen(user, status, Timestamp::now());
        self.store.upsert(presence.clone()).await?;
        Ok(presence)
    }

    /// Marks the caller offline.
    pub async fn go_offline(&self, user: &AuthenticatedUser) -> Result<(), HandlerError> {
        self.store.mark_offline(&user.id, Timestamp::now()).await?;
        Ok(())
    }

    /// Users seen within the active window. Requires `ManageUsers`.
    pub async fn list_active(&self, user: &AuthenticatedUser) -> Result<Vec<Presence>, HandlerError> {
        self.policy.authorize(user, Permission::ManageUsers)?;
        let since = Timestamp::now().minus_secs(ACTIVE_WINDOW_SECS);
        Ok(self.store.list_active(since).await?)
    }
}

/// Read access to the AI audit trail.
pub struct AuditHandler {
    log: Arc<dyn AuditLog>,
    policy: Arc<AccessPolicy>,
}

impl AuditHandler {
    pub fn new(log: Arc<dyn AuditLog>, policy: Arc<AccessPolicy>) -> Self {
        Self { log, policy }
    }

    /// Most recent entries, newest first. Requires `ViewAuditLog`.
    pub async fn recent(
        &self,
        user: &AuthenticatedUser,
        limit: Option<u32>,
    ) -> Result<Vec<AuditEntry>, HandlerError> {
        self.policy.authorize(user, Permission::ViewAuditLog)?;
        Ok(self.log.recent(audit_limit(limit)).await?)
    }
}
