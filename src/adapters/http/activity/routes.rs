//! Axum router configuration for presence, audit and permission endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{go_offline, heartbeat, list_audit, list_presence, my_permissions};

/// Create the activity router.
///
/// # Routes
///
/// - `PATCH /presence` - heartbeat (`{status?: "online"|"away"}`)
/// - `DELETE /presence` - mark offline
/// - `GET /presence` - active users (ManageUsers)
/// - `GET /audit?limit=` - recent AI generations (ViewAuditLog)
/// - `GET /me/permissions` - caller's role and capabilities
pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/presence",
            get(list_presence).patch(heartbeat).delete(go_offline),
        )
        .route("/audit", get(list_audit))
        .route("/me/permissions", get(my_permissions))
}
