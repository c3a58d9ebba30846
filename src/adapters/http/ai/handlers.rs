//! HTTP handlers for the AI feature endpoints.
//!
//! One generic handler serves every feature; the route picks the
//! [`AiFeature`] by type.

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::AiFeature;

use super::dto::GenerationResponse;

/// POST /api/<feature> - validate, prompt the model, normalize, respond
pub async fn generate<F: AiFeature>(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    ApiJson(request): ApiJson<F::Request>,
) -> Result<Json<GenerationResponse<F::Output>>, ApiError> {
    let trace_id = Uuid::new_v4().to_string();

    let result = state
        .generate
        .handle::<F>(&user, request, &trace_id)
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(result.into()))
}
