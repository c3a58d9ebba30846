//! Functional Capacity Assessment request.

use serde::Deserialize;

use crate::domain::clinical::{
    AssessmentScore, AssessmentScoreInput, Participant, ParticipantInput, LONG_TEXT_MAX,
    NAME_MAX, SHORT_TEXT_MAX,
};
use crate::domain::foundation::{optional_text, required_text, text_list, ValidationError};
use crate::domain::prompt::{PromptDocument, PromptPayload, Section, Table};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainObservationInput {
    pub domain: Option<String>,
    pub observations: Option<String>,
}

/// Clinician observations for one functional domain (e.g. self-care, mobility).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainObservation {
    pub domain: String,
    pub observations: String,
}

/// Request body for `POST /api/fca-pipeline`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FcaRequest {
    #[serde(flatten)]
    pub participant: ParticipantInput,
    pub assessment_date: Option<String>,
    pub referral_reason: Option<String>,
    pub living_situation: Option<String>,
    pub goals: Option<Vec<String>>,
    pub domain_observations: Option<Vec<DomainObservationInput>>,
    pub assessment_scores: Option<Vec<AssessmentScoreInput>>,
    pub clinical_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FcaInput {
    pub participant: Participant,
    pub assessment_date: Option<String>,
    pub referral_reason: Option<String>,
    pub living_situation: Option<String>,
    pub goals: Vec<String>,
    pub observations: Vec<DomainObservation>,
    pub assessment_scores: Vec<AssessmentScore>,
    pub clinical_notes: Option<String>,
}

impl FcaInput {
    /// Requires a participant name and some clinical evidence: at least one
    /// domain observation or clinical notes. Observations with no text are
    /// skipped.
    pub fn validate(request: FcaRequest) -> Result<Self, ValidationError> {
        let participant = Participant::from_input(request.participant)?;

        let mut observations = Vec::new();
        for obs in request.domain_observations.unwrap_or_default() {
            let Some(text) = optional_text(obs.observations, "Domain observations", LONG_TEXT_MAX)?
            else {
                continue;
            };
            observations.push(DomainObservation {
                domain: required_text(obs.domain, "Domain name", NAME_MAX)?,
                observations: text,
            });
        }
        let clinical_notes = optional_text(request.clinical_notes, "Clinical notes", LONG_TEXT_MAX)?;

        if observations.is_empty() && clinical_notes.is_none() {
            return Err(ValidationError::rule(
                "At least one domain observation or clinical notes are required",
            ));
        }

        Ok(Self {
            participant,
            assessment_date: optional_text(request.assessment_date, "Assessment date", NAME_MAX)?,
            referral_reason: optional_text(
                request.referral_reason,
                "Referral reason",
                SHORT_TEXT_MAX,
            )?,
            living_situation: optional_text(
                request.living_situation,
                "Living situation",
                SHORT_TEXT_MAX,
            )?,
            goals: text_list(request.goals, "Goal", SHORT_TEXT_MAX)?,
            observations,
            assessment_scores: AssessmentScore::list(request.assessment_scores)?,
            clinical_notes,
        })
    }
}

impl PromptPayload for FcaInput {
    fn document(&self) -> PromptDocument {
        let observations = self
            .observations
            .iter()
            .fold(Table::new(["Domain", "Observations"]), |t, o| {
                t.row([o.domain.as_str(), o.observations.as_str()])
            });

        PromptDocument::new()
            .intro("Draft a Functional Capacity Assessment report from the clinical information below.")
            .section(self.participant.section())
            .section(
                Section::new("Assessment Context")
                    .field("Assessment Date", self.assessment_date.as_ref())
                    .field("Reason for Referral", self.referral_reason.as_ref())
                    .field("Living Situation", self.living_situation.as_ref()),
            )
            .section(Section::new("Participant Goals").bullets(&self.goals))
            .section(Section::new("Domain Observations").table(observations))
            .section(
                Section::new("Assessment Scores")
                    .table(AssessmentScore::table(&self.assessment_scores)),
            )
            .section(Section::new("Clinical Notes").text(self.clinical_notes.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named() -> FcaRequest {
        FcaRequest {
            participant: ParticipantInput {
                participant_name: Some("Priya".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn requires_some_clinical_evidence() {
        let err = FcaInput::validate(named()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one domain observation or clinical notes are required"
        );
    }

    #[test]
    fn blank_observations_do_not_count_as_evidence() {
        let err = FcaInput::validate(FcaRequest {
            domain_observations: Some(vec![DomainObservationInput {
                domain: Some("Mobility".into()),
                observations: Some("  ".into()),
            }]),
            ..named()
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("At least one domain observation"));
    }

    #[test]
    fn clinical_notes_alone_are_enough() {
        let input = FcaInput::validate(FcaRequest {
            clinical_notes: Some("Requires prompting for meal prep.".into()),
            ..named()
        })
        .unwrap();
        let text = input.document().render();
        assert!(text.contains("## Clinical Notes"));
        assert!(!text.contains("Domain Observations"));
        assert!(!text.contains("Assessment Context"));
    }

    #[test]
    fn observations_render_as_table() {
        let input = FcaInput::validate(FcaRequest {
            domain_observations: Some(vec![DomainObservationInput {
                domain: Some("Self-care".into()),
                observations: Some("Independent with set-up".into()),
            }]),
            ..named()
        })
        .unwrap();
        assert!(input
            .document()
            .render()
            .contains("| Self-care | Independent with set-up |"));
    }
}
