//! Request and response types for presence, audit and permission endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::activity::{AuditEntry, Presence, PresenceStatus};

/// PATCH /api/presence body. An empty body means "online".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeartbeatRequest {
    pub status: Option<PresenceStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresenceListResponse {
    pub users: Vec<Presence>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditListResponse {
    pub entries: Vec<AuditEntry>,
}
