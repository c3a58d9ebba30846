//! Application layer - request orchestration.
//!
//! Handlers coordinate domain logic with the ports. Every failure leaves
//! this layer as a [`HandlerError`].

mod error;
pub mod handlers;

pub use error::HandlerError;
pub use handlers::{
    AiFeature, AtJustificationFeature, AtJustificationReport, AuditHandler, CaseNotesFeature,
    FcaPipelineFeature, GenerateHandler, GenerateResult, GoalStrategiesFeature,
    PermissionsHandler, PresenceHandler, QualityCheckFeature, RequestStage, UserPermissions,
};
