//! User presence (last-seen tracking).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthenticatedUser, Timestamp, UserId, ValidationError};

/// Users seen within this window count as active.
pub const ACTIVE_WINDOW_SECS: i64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    #[default]
    Online,
    Away,
    Offline,
}

impl PresenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Away => "away",
            PresenceStatus::Offline => "offline",
        }
    }

    /// Parses a stored status; unknown values read as offline.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "online" => PresenceStatus::Online,
            "away" => PresenceStatus::Away,
            _ => PresenceStatus::Offline,
        }
    }

    /// Status a heartbeat may set. Going offline is a separate operation.
    pub fn for_heartbeat(requested: Option<Self>) -> Result<Self, ValidationError> {
        match requested.unwrap_or_default() {
            PresenceStatus::Offline => Err(ValidationError::rule(
                "Status must be online or away",
            )),
            status => Ok(status),
        }
    }
}

/// Last known presence of one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    pub user_id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub status: PresenceStatus,
    pub last_seen: Timestamp,
}

impl Presence {
    /// Presence for `user` observed at `now`.
    pub fn seen(user: &AuthenticatedUser, status: PresenceStatus, now: Timestamp) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            status,
            last_seen: now,
        }
    }

    /// Online or away and seen within the active window before `now`.
    pub fn is_active(&self, now: &Timestamp) -> bool {
        self.status != PresenceStatus::Offline
            && !self.last_seen.is_before(&now.minus_secs(ACTIVE_WINDOW_SECS))
    }
}
