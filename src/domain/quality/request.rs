//! Report audit request.

use serde::Deserialize;

use crate::domain::clinical::NAME_MAX;
use crate::domain::foundation::{optional_text, required_text, ValidationError};
use crate::domain::prompt::{PromptDocument, PromptPayload, Section};

/// Longest report accepted for audit.
pub const REPORT_MAX_CHARS: usize = 100_000;

/// Request body for `POST /api/quality-checker`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityCheckRequest {
    pub report_content: Option<String>,
    pub report_type: Option<String>,
    pub participant_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityCheckInput {
    pub report_content: String,
    pub report_type: Option<String>,
    pub participant_name: Option<String>,
}

impl QualityCheckInput {
    pub fn validate(request: QualityCheckRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            report_content: required_text(
                request.report_content,
                "Report content",
                REPORT_MAX_CHARS,
            )?,
            report_type: optional_text(request.report_type, "Report type", NAME_MAX)?,
            participant_name: optional_text(
                request.participant_name,
                "Participant name",
                NAME_MAX,
            )?,
        })
    }
}

impl PromptPayload for QualityCheckInput {
    fn document(&self) -> PromptDocument {
        PromptDocument::new()
            .intro(
                "Audit the report below for NDIS funding risk. Score terminology, evidence \
                 and reasoning from 0 (poor) to 100 (excellent), and give an overall risk \
                 score from 0 (low risk) to 100 (high risk).",
            )
            .section(
                Section::new("Report Details")
                    .field("Report Type", self.report_type.as_ref())
                    .field("Participant", self.participant_name.as_ref()),
            )
            .section(Section::new("Report Content").text(Some(&self.report_content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_rejected_with_user_message() {
        let err = QualityCheckInput::validate(QualityCheckRequest {
            report_content: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Report content is required");
    }

    #[test]
    fn oversized_report_is_rejected() {
        let err = QualityCheckInput::validate(QualityCheckRequest {
            report_content: Some("a".repeat(REPORT_MAX_CHARS + 1)),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Report content exceeds maximum length of 100000 characters"
        );
    }

    #[test]
    fn details_section_omitted_when_no_metadata() {
        let input = QualityCheckInput::validate(QualityCheckRequest {
            report_content: Some("Participant is wheelchair bound.".into()),
            ..Default::default()
        })
        .unwrap();
        let text = input.document().render();
        assert!(!text.contains("Report Details"));
        assert!(text.contains("## Report Content\nParticipant is wheelchair bound."));
    }
}
