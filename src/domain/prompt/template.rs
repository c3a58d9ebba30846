//! System-prompt templates, one per AI feature.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Model quality/latency tier requested from the AI provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    /// Low-latency model for short drafting tasks.
    #[default]
    Fast,
    /// Higher-quality model for clinical reports and audits.
    Accurate,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Fast => "fast",
            ModelTier::Accurate => "accurate",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const NDIS_CONTEXT: &str = "You are assisting Australian allied health professionals and \
support coordinators working under the National Disability Insurance Scheme (NDIS). \
Write in Australian English, use person-first language, and ground every statement \
in the information provided. Do not invent assessment results, diagnoses or costs.";

/// Identifies the system prompt and output contract for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptTemplate {
    AtJustification,
    QualityChecker,
    FcaPipeline,
    GoalStrategies,
    CaseNotes,
}

impl PromptTemplate {
    pub fn id(&self) -> &'static str {
        match self {
            PromptTemplate::AtJustification => "at-justification",
            PromptTemplate::QualityChecker => "quality-checker",
            PromptTemplate::FcaPipeline => "fca-pipeline",
            PromptTemplate::GoalStrategies => "sc-goal-strategies",
            PromptTemplate::CaseNotes => "case-notes",
        }
    }

    /// Tier the feature runs on.
    pub fn tier(&self) -> ModelTier {
        match self {
            PromptTemplate::AtJustification
            | PromptTemplate::QualityChecker
            | PromptTemplate::FcaPipeline => ModelTier::Accurate,
            PromptTemplate::GoalStrategies | PromptTemplate::CaseNotes => ModelTier::Fast,
        }
    }

    /// Sampling temperature; audits run cooler than drafting.
    pub fn temperature(&self) -> f32 {
        match self {
            PromptTemplate::QualityChecker => 0.2,
            PromptTemplate::AtJustification | PromptTemplate::FcaPipeline => 0.4,
            PromptTemplate::GoalStrategies | PromptTemplate::CaseNotes => 0.5,
        }
    }

    /// Role-specific system prompt.
    pub fn system_prompt(&self) -> String {
        let role = match self {
            PromptTemplate::AtJustification => {
                "You are an experienced occupational therapist writing an assistive \
                 technology justification for NDIS funding. Argue from functional need, \
                 trial evidence and value for money against the reasonable and necessary \
                 criteria."
            }
            PromptTemplate::QualityChecker => {
                "You are an NDIS report auditor. Identify wording that risks a funding \
                 decline: deficit or non-NDIS terminology, claims without supporting \
                 evidence, and recommendations whose reasoning does not follow from the \
                 findings. Quote the exact phrase for every issue."
            }
            PromptTemplate::FcaPipeline => {
                "You are a senior occupational therapist drafting a Functional Capacity \
                 Assessment. Summarise function per domain, rate functional level from 0 \
                 (fully dependent) to 100 (fully independent) and estimate weekly support \
                 hours."
            }
            PromptTemplate::GoalStrategies => {
                "You are an NDIS support coordinator. Propose practical, measurable \
                 strategies, funded supports and milestones for each participant goal."
            }
            PromptTemplate::CaseNotes => {
                "You are an NDIS support coordinator writing an objective, chronological \
                 case note from an activity log, suitable for audit."
            }
        };
        format!("{role}\n\n{NDIS_CONTEXT}")
    }

    /// JSON shape the model must reply with.
    pub fn output_contract(&self) -> &'static str {
        match self {
            PromptTemplate::AtJustification => {
                r#"{"summary": string, "clinicalRationale": string, "valueForMoney": string, "risks": [string], "recommendations": [string]}"#
            }
            PromptTemplate::QualityChecker => {
                r#"{"riskScore": 0-100, "terminologyScore": 0-100, "evidenceScore": 0-100, "reasoningScore": 0-100, "summary": string, "issues": [{"phrase": string, "category": "terminology"|"evidence"|"reasoning", "explanation": string, "suggestion": string}]}"#
            }
            PromptTemplate::FcaPipeline => {
                r#"{"executiveSummary": string, "domains": [{"domain": string, "summary": string, "functionalLevel": 0-100, "supportNeeds": [string]}], "recommendations": [string], "supportHours": {"weekday": number, "weekend": number, "overnight": number}}"#
            }
            PromptTemplate::GoalStrategies => {
                r#"{"overallSummary": string, "budgetConsiderations": string, "goals": [{"goal": string, "strategies": [string], "supports": [string], "milestones": [string]}]}"#
            }
            PromptTemplate::CaseNotes => {
                r#"{"caseNote": string, "keyPoints": [string], "followUps": [string], "activityStats": {"totalActivities": number, "phoneCalls": number, "emails": number, "meetings": number, "totalMinutes": number}}"#
            }
        }
    }

    /// Closing instruction appended to every synthesized prompt.
    pub fn response_instruction(&self) -> String {
        format!(
            "Respond with a single JSON object only, no prose or code fences, matching:\n{}",
            self.output_contract()
        )
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
