//! Activity adapters - presence and audit log storage.
//!
//! - `InMemoryPresenceStore` / `InMemoryAuditLog` - default, and for tests
//! - `PostgresPresenceStore` / `PostgresAuditLog` - when a database is configured

mod in_memory;
mod postgres;

pub use in_memory::{InMemoryAuditLog, InMemoryPresenceStore};
pub use postgres::{run_migrations, PostgresAuditLog, PostgresPresenceStore};
