//! Axum router configuration for AI feature endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;
use crate::application::{
    AtJustificationFeature, CaseNotesFeature, FcaPipelineFeature, GoalStrategiesFeature,
    QualityCheckFeature,
};

use super::handlers::generate;

/// Create the AI feature router.
///
/// # Routes
///
/// All routes require authentication and the `UseAiTools` capability.
/// - `POST /at-justification` - AT comparison and justification draft
/// - `POST /quality-checker` - report quality audit
/// - `POST /fca-pipeline` - Functional Capacity Assessment draft
/// - `POST /sc-goal-strategies` - support coordination goal strategies
/// - `POST /case-notes` - case note from an activity log
pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/at-justification", post(generate::<AtJustificationFeature>))
        .route("/quality-checker", post(generate::<QualityCheckFeature>))
        .route("/fca-pipeline", post(generate::<FcaPipelineFeature>))
        .route("/sc-goal-strategies", post(generate::<GoalStrategiesFeature>))
        .route("/case-notes", post(generate::<CaseNotesFeature>))
}
