//! Normalized quality assessment.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::Percentage;
use crate::domain::normalize::{
    object_list, pick, score_or_midpoint, text, unwrap_envelope, Normalize,
};

/// Risk score at or below which a report passes.
pub const PASS_THRESHOLD: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Terminology,
    Evidence,
    Reasoning,
}

impl IssueCategory {
    /// Parses a model-supplied category; anything unrecognised is terminology.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "evidence" => IssueCategory::Evidence,
            "reasoning" => IssueCategory::Reasoning,
            _ => IssueCategory::Terminology,
        }
    }

    /// Severity is a function of category only.
    pub fn severity(&self) -> Severity {
        match self {
            IssueCategory::Evidence => Severity::High,
            IssueCategory::Reasoning => Severity::Medium,
            IssueCategory::Terminology => Severity::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIssue {
    pub phrase: String,
    pub category: IssueCategory,
    pub explanation: String,
    pub suggestion: String,
    pub severity: Severity,
}

impl QualityIssue {
    /// Builds an issue from a model object. Issues without a phrase are dropped.
    fn from_object(value: &Value) -> Option<Self> {
        let phrase = text(pick(value, &["phrase", "text", "quote"]));
        if phrase.is_empty() {
            return None;
        }
        // Severity supplied by the model is ignored.
        let category = IssueCategory::parse_lenient(&text(pick(value, &["category", "type"])));
        Some(Self {
            phrase,
            category,
            explanation: text(pick(value, &["explanation", "reason"])),
            suggestion: text(pick(value, &["suggestion", "replacement"])),
            severity: category.severity(),
        })
    }
}

/// Audit result. `quality_score` is always `100 - risk_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessment {
    pub risk_score: Percentage,
    pub terminology_score: Percentage,
    pub evidence_score: Percentage,
    pub reasoning_score: Percentage,
    pub quality_score: Percentage,
    pub pass_threshold: bool,
    pub summary: String,
    pub issues: Vec<QualityIssue>,
}

impl QualityAssessment {
    pub fn new(
        risk_score: Percentage,
        terminology_score: Percentage,
        evidence_score: Percentage,
        reasoning_score: Percentage,
        summary: String,
        issues: Vec<QualityIssue>,
    ) -> Self {
        Self {
            risk_score,
            terminology_score,
            evidence_score,
            reasoning_score,
            quality_score: risk_score.complement(),
            pass_threshold: risk_score.value() <= PASS_THRESHOLD,
            summary,
            issues,
        }
    }
}

impl Normalize for QualityAssessment {
    fn normalize(raw: &Value) -> Self {
        let raw = unwrap_envelope(raw);
        let issues = object_list(pick(raw, &["issues"]))
            .into_iter()
            .filter_map(QualityIssue::from_object)
            .collect();
        Self::new(
            score_or_midpoint(pick(raw, &["riskScore", "risk_score"])),
            score_or_midpoint(pick(raw, &["terminologyScore", "terminology_score"])),
            score_or_midpoint(pick(raw, &["evidenceScore", "evidence_score"])),
            score_or_midpoint(pick(raw, &["reasoningScore", "reasoning_score"])),
            text(pick(raw, &["summary"])),
            issues,
        )
    }
}
