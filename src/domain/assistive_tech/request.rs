//! AT justification request: validation and prompt payload.

use serde::Deserialize;

use crate::domain::clinical::{
    AssessmentScore, AssessmentScoreInput, Participant, ParticipantInput, LONG_TEXT_MAX,
    SHORT_TEXT_MAX,
};
use crate::domain::foundation::{optional_text, text_list, ValidationError};
use crate::domain::prompt::{
    format_currency, format_number, PromptDocument, PromptPayload, Section, Table,
};

use super::comparison::{compare, ComparisonResult, Recommendation};
use super::option::{AtOption, AtOptionInput, OptionRole};

/// Request body for `POST /api/at-justification`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtJustificationRequest {
    #[serde(flatten)]
    pub participant: ParticipantInput,
    #[serde(rename = "selectedAT")]
    pub selected_at: Option<AtOptionInput>,
    #[serde(rename = "alternativeAT")]
    pub alternative_at: Option<AtOptionInput>,
    pub functional_need: Option<String>,
    pub goals: Option<Vec<String>>,
    pub assessment_scores: Option<Vec<AssessmentScoreInput>>,
    pub trial_notes: Option<String>,
}

/// Validated AT request with its locally computed comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct AtJustificationInput {
    pub participant: Participant,
    pub selected: AtOption,
    pub alternative: AtOption,
    pub functional_need: Option<String>,
    pub goals: Vec<String>,
    pub assessment_scores: Vec<AssessmentScore>,
    pub trial_notes: Option<String>,
    pub comparison: ComparisonResult,
}

impl AtJustificationInput {
    pub fn validate(request: AtJustificationRequest) -> Result<Self, ValidationError> {
        let participant = Participant::from_input(request.participant)?;

        let (Some(selected), Some(alternative)) = (request.selected_at, request.alternative_at)
        else {
            return Err(ValidationError::rule(
                "Both selected and alternative AT options are required",
            ));
        };
        let selected = AtOption::from_input(selected, OptionRole::Selected)?;
        let alternative = AtOption::from_input(alternative, OptionRole::Alternative)?;
        let comparison = compare(&selected, &alternative);

        Ok(Self {
            participant,
            functional_need: optional_text(
                request.functional_need,
                "Functional need",
                LONG_TEXT_MAX,
            )?,
            goals: text_list(request.goals, "Goal", SHORT_TEXT_MAX)?,
            assessment_scores: AssessmentScore::list(request.assessment_scores)?,
            trial_notes: optional_text(request.trial_notes, "Trial notes", LONG_TEXT_MAX)?,
            selected,
            alternative,
            comparison,
        })
    }
}

fn option_section(title: &str, option: &AtOption) -> Section {
    Section::new(title)
        .field("Name", Some(&option.name))
        .field("Cost", Some(format_currency(option.cost)))
        .field(
            "Annual Maintenance",
            Some(format_currency(option.maintenance_cost)),
        )
        .field(
            "Effectiveness",
            Some(format!("{}/100", format_number(option.effectiveness))),
        )
        .field(
            "Participant Preference",
            Some(format!("{}/100", format_number(option.preference))),
        )
        .field("Description", option.description.as_ref())
}

impl PromptPayload for AtJustificationInput {
    fn document(&self) -> PromptDocument {
        let c = &self.comparison;
        let favoured = match c.recommendation {
            Recommendation::Selected => &self.selected.name,
            Recommendation::Alternative => &self.alternative.name,
        };
        let comparison = Table::new(["Measure", "Selected", "Alternative"])
            .row([
                "Weighted score".to_string(),
                c.selected_score.to_string(),
                c.alternative_score.to_string(),
            ])
            .row([
                "Five-year cost".to_string(),
                format_currency(c.five_year_cost.selected),
                format_currency(c.five_year_cost.alternative),
            ]);

        PromptDocument::new()
            .intro(
                "Draft an assistive technology funding justification for the participant \
                 below. The weighted comparison has already been calculated; use its \
                 figures as given.",
            )
            .section(self.participant.section())
            .section(Section::new("Functional Need").text(self.functional_need.as_ref()))
            .section(Section::new("Participant Goals").bullets(&self.goals))
            .section(option_section("Selected Option", &self.selected))
            .section(option_section("Alternative Option", &self.alternative))
            .section(
                Section::new("Comparison")
                    .table(comparison)
                    .field("Up-front Cost Difference", Some(format_currency(c.cost_difference)))
                    .field(
                        "Effectiveness Difference",
                        Some(format_number(c.effectiveness_difference)),
                    )
                    .field("Favoured Option", Some(favoured)),
            )
            .section(
                Section::new("Assessment Scores")
                    .table(AssessmentScore::table(&self.assessment_scores)),
            )
            .section(Section::new("Trial Notes").text(self.trial_notes.as_ref()))
    }
}
