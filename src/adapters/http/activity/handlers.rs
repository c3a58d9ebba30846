//! HTTP handlers for presence, audit and permission endpoints.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::INVALID_BODY_MESSAGE;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::UserPermissions;
use crate::domain::activity::Presence;

use super::dto::{AuditListResponse, AuditQuery, HeartbeatRequest, PresenceListResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Presence
// ════════════════════════════════════════════════════════════════════════════════

/// PATCH /api/presence - record a heartbeat for the caller
pub async fn heartbeat(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Result<Json<Presence>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        HeartbeatRequest::default()
    } else {
        serde_json::from_slice::<HeartbeatRequest>(&body)
            .map_err(|_| ApiError::bad_request(INVALID_BODY_MESSAGE))?
    };

    let presence = state
        .presence
        .heartbeat(&user, request.status)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(presence))
}

/// DELETE /api/presence - mark the caller offline
pub async fn go_offline(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<StatusCode, ApiError> {
    state
        .presence
        .go_offline(&user)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/presence - users seen recently (requires ManageUsers)
pub async fn list_presence(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<PresenceListResponse>, ApiError> {
    let users = state
        .presence
        .list_active(&user)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(PresenceListResponse { users }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Audit
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/audit?limit= - recent AI generations (requires ViewAuditLog)
pub async fn list_audit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    query: Result<Query<AuditQuery>, QueryRejection>,
) -> Result<Json<AuditListResponse>, ApiError> {
    let Query(query) = query.map_err(|_| ApiError::bad_request("Invalid limit"))?;

    let entries = state
        .audit
        .recent(&user, query.limit)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(AuditListResponse { entries }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Permissions
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/me/permissions - caller's role and capabilities
pub async fn my_permissions(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Json<UserPermissions> {
    Json(state.permissions.handle(&user))
}
