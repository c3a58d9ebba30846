//! Presence and audit activity records.

mod audit;
mod presence;

pub use audit::{audit_limit, AuditEntry, DEFAULT_AUDIT_LIMIT, MAX_AUDIT_LIMIT};
pub use presence::{Presence, PresenceStatus, ACTIVE_WINDOW_SECS};
