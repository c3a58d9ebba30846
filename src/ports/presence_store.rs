//! Presence store port - last-seen tracking for signed-in users.

use async_trait::async_trait;

use crate::domain::activity::Presence;
use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// Persists each user's latest presence. One row per user.
#[async_trait]
pub trait PresenceStore: Send + Sync {
    /// Inserts or replaces the user's presence.
    async fn upsert(&self, presence: Presence) -> Result<(), DomainError>;

    /// Marks the user offline. A user with no presence row is a no-op.
    async fn mark_offline(&self, user_id: &UserId, at: Timestamp) -> Result<(), DomainError>;

    /// Lists users that are not offline and were seen at or after `since`,
    /// most recently seen first.
    async fn list_active(&self, since: Timestamp) -> Result<Vec<Presence>, DomainError>;
}
