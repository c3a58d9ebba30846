//! Application handlers.
//!
//! - `generate` - the AI request pipeline shared by every feature endpoint
//! - `features` - the five AI features plugged into that pipeline
//! - `activity` - presence heartbeats and the audit trail
//! - `access` - the caller's role and capabilities

mod access;
mod activity;
mod features;
mod generate;

pub use access::{PermissionsHandler, UserPermissions};
pub use activity::{AuditHandler, PresenceHandler};
pub use features::{
    AtJustificationFeature, AtJustificationReport, CaseNotesFeature, FcaPipelineFeature,
    GoalStrategiesFeature, QualityCheckFeature,
};
pub use generate::{AiFeature, GenerateHandler, GenerateResult, RequestStage, AI_NOT_CONFIGURED};
