//! The five AI features wired into the [`GenerateHandler`] pipeline.
//!
//! [`GenerateHandler`]: super::GenerateHandler

use serde::Serialize;
use serde_json::Value;

use crate::domain::assistive_tech::{
    AtJustification, AtJustificationInput, AtJustificationRequest, ComparisonResult,
};
use crate::domain::case_notes::{CaseNoteDraft, CaseNotesInput, CaseNotesRequest};
use crate::domain::fca::{FcaInput, FcaReport, FcaRequest};
use crate::domain::foundation::ValidationError;
use crate::domain::goals::{GoalStrategies, GoalStrategiesInput, GoalStrategiesRequest};
use crate::domain::normalize::Normalize;
use crate::domain::prompt::PromptTemplate;
use crate::domain::quality::{QualityAssessment, QualityCheckInput, QualityCheckRequest};

use super::generate::AiFeature;

/// AT comparison plus the drafted justification.
///
/// The comparison is computed locally; only the justification comes from
/// the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtJustificationReport {
    pub comparison: ComparisonResult,
    pub justification: AtJustification,
}

pub struct AtJustificationFeature;

impl AiFeature for AtJustificationFeature {
    type Request = AtJustificationRequest;
    type Validated = AtJustificationInput;
    type Output = AtJustificationReport;

    const TEMPLATE: PromptTemplate = PromptTemplate::AtJustification;

    fn validate(request: Self::Request) -> Result<Self::Validated, ValidationError> {
        AtJustificationInput::validate(request)
    }

    fn finish(validated: Self::Validated, raw: &Value) -> Self::Output {
        AtJustificationReport {
            comparison: validated.comparison,
            justification: AtJustification::normalize(raw),
        }
    }
}

pub struct QualityCheckFeature;

impl AiFeature for QualityCheckFeature {
    type Request = QualityCheckRequest;
    type Validated = QualityCheckInput;
    type Output = QualityAssessment;

    const TEMPLATE: PromptTemplate = PromptTemplate::QualityChecker;

    fn validate(request: Self::Request) -> Result<Self::Validated, ValidationError> {
        QualityCheckInput::validate(request)
    }

    fn finish(_validated: Self::Validated, raw: &Value) -> Self::Output {
        QualityAssessment::normalize(raw)
    }
}

pub struct FcaPipelineFeature;

impl AiFeature for FcaPipelineFeature {
    type Request = FcaRequest;
    type Validated = FcaInput;
    type Output = FcaReport;

    const TEMPLATE: PromptTemplate = PromptTemplate::FcaPipeline;

    fn validate(request: Self::Request) -> Result<Self::Validated, ValidationError> {
        FcaInput::validate(request)
    }

    fn finish(_validated: Self::Validated, raw: &Value) -> Self::Output {
        FcaReport::normalize(raw)
    }
}

pub struct GoalStrategiesFeature;

impl AiFeature for GoalStrategiesFeature {
    type Request = GoalStrategiesRequest;
    type Validated = GoalStrategiesInput;
    type Output = GoalStrategies;

    const TEMPLATE: PromptTemplate = PromptTemplate::GoalStrategies;

    fn validate(request: Self::Request) -> Result<Self::Validated, ValidationError> {
        GoalStrategiesInput::validate(request)
    }

    fn finish(_validated: Self::Validated, raw: &Value) -> Self::Output {
        GoalStrategies::normalize(raw)
    }
}

pub struct CaseNotesFeature;

impl AiFeature for CaseNotesFeature {
    type Request = CaseNotesRequest;
    type Validated = CaseNotesInput;
    type Output = CaseNoteDraft;

    const TEMPLATE: PromptTemplate = PromptTemplate::CaseNotes;

    fn validate(request: Self::Request) -> Result<Self::Validated, ValidationError> {
        CaseNotesInput::validate(request)
    }

    fn finish(_validated: Self::Validated, raw: &Value) -> Self::Output {
        CaseNoteDraft::normalize(raw)
    }
}
