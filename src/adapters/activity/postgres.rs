//! PostgreSQL activity stores.
//!
//! Tables are created by `migrations/0001_activity.sql`; see [`run_migrations`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::activity::{AuditEntry, Presence, PresenceStatus};
use crate::domain::foundation::{AuditEntryId, DomainError, Timestamp, UserId};
use crate::ports::{AuditLog, PresenceStore};

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
}

fn invalid_user_id(e: impl std::fmt::Display) -> DomainError {
    DomainError::database(format!("Invalid user_id: {}", e))
}

// ════════════════════════════════════════════════════════════════════════════════
// Presence
// ════════════════════════════════════════════════════════════════════════════════

/// PostgreSQL implementation of the PresenceStore port.
pub struct PostgresPresenceStore {
    pool: PgPool,
}

impl PostgresPresenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PresenceRow {
    user_id: String,
    email: String,
    display_name: Option<String>,
    status: String,
    last_seen: DateTime<Utc>,
}

impl TryFrom<PresenceRow> for Presence {
    type Error = DomainError;

    fn try_from(row: PresenceRow) -> Result<Self, Self::Error> {
        Ok(Presence {
            user_id: UserId::new(row.user_id).map_err(invalid_user_id)?,
            email: row.email,
            display_name: row.display_name,
            status: PresenceStatus::from_stored(&row.status),
            last_seen: Timestamp::from_datetime(row.last_seen),
        })
    }
}

#[async_trait]
impl PresenceStore for PostgresPresenceStore {
    async fn upsert(&self, presence: Presence) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_presence (user_id, email, display_name, status, last_seen)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                status = EXCLUDED.status,
                last_seen = EXCLUDED.last_seen
            "#,
        )
        .bind(presence.user_id.as_str())
        .bind(&presence.email)
        .bind(&presence.display_name)
        .bind(presence.status.as_str())
        .bind(presence.last_seen.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to upsert presence: {}", e)))?;

        Ok(())
    }

    async fn mark_offline(&self, user_id: &UserId, at: Timestamp) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE user_presence SET status = $2, last_seen = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .bind(PresenceStatus::Offline.as_str())
        .bind(at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to mark presence offline: {}", e)))?;

        Ok(())
    }

    async fn list_active(&self, since: Timestamp) -> Result<Vec<Presence>, DomainError> {
        let rows: Vec<PresenceRow> = sqlx::query_as(
            r#"
            SELECT user_id, email, display_name, status, last_seen
            FROM user_presence
            WHERE status <> 'offline' AND last_seen >= $1
            ORDER BY last_seen DESC
            "#,
        )
        .bind(since.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list presence: {}", e)))?;

        rows.into_iter().map(Presence::try_from).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Audit log
// ════════════════════════════════════════════════════════════════════════════════

/// PostgreSQL implementation of the AuditLog port.
pub struct PostgresAuditLog {
    pool: PgPool,
}

impl PostgresAuditLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AuditRow {
    id: Uuid,
    user_id: String,
    user_email: String,
    feature: String,
    model: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditRow> for AuditEntry {
    type Error = DomainError;

    fn try_from(row: AuditRow) -> Result<Self, Self::Error> {
        Ok(AuditEntry {
            id: AuditEntryId::from_uuid(row.id),
            user_id: UserId::new(row.user_id).map_err(invalid_user_id)?,
            user_email: row.user_email,
            feature: row.feature,
            model: row.model,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl AuditLog for PostgresAuditLog {
    async fn append(&self, entry: AuditEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ai_audit_log (id, user_id, user_email, feature, model, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.user_id.as_str())
        .bind(&entry.user_email)
        .bind(&entry.feature)
        .bind(&entry.model)
        .bind(entry.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to append audit entry: {}", e)))?;

        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<AuditEntry>, DomainError> {
        let rows: Vec<AuditRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, user_email, feature, model, created_at
            FROM ai_audit_log
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to read audit log: {}", e)))?;

        rows.into_iter().map(AuditEntry::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_row_maps_unknown_status_to_offline() {
        let row = PresenceRow {
            user_id: "u-1".into(),
            email: "sc@clinic.example".into(),
            display_name: None,
            status: "busy".into(),
            last_seen: Utc::now(),
        };

        let presence = Presence::try_from(row).unwrap();

        assert_eq!(presence.status, PresenceStatus::Offline);
    }

    #[test]
    fn audit_row_with_blank_user_is_rejected() {
        let row = AuditRow {
            id: Uuid::new_v4(),
            user_id: " ".into(),
            user_email: "x@y".into(),
            feature: "case-notes".into(),
            model: "m".into(),
            created_at: Utc::now(),
        };

        let err = AuditEntry::try_from(row).unwrap_err();

        assert!(err.message().contains("Invalid user_id"));
    }
}
