//! Audit log port - append-only record of AI generations.

use async_trait::async_trait;

use crate::domain::activity::AuditEntry;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Appends an entry.
    async fn append(&self, entry: AuditEntry) -> Result<(), DomainError>;

    /// Returns up to `limit` entries, newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<AuditEntry>, DomainError>;
}
