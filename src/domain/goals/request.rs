//! Support coordination goal strategies request.

use serde::Deserialize;

use crate::domain::clinical::{Participant, ParticipantInput, LONG_TEXT_MAX, SHORT_TEXT_MAX};
use crate::domain::foundation::{optional_text, text_list, ValidationError};
use crate::domain::prompt::{format_currency, PromptDocument, PromptPayload, Section};

/// Request body for `POST /api/sc-goal-strategies`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStrategiesRequest {
    #[serde(flatten)]
    pub participant: ParticipantInput,
    pub goals: Option<Vec<String>>,
    pub plan_budget: Option<f64>,
    pub plan_period: Option<String>,
    pub current_supports: Option<Vec<String>>,
    pub informal_supports: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalStrategiesInput {
    pub participant: Participant,
    pub goals: Vec<String>,
    pub plan_budget: Option<f64>,
    pub plan_period: Option<String>,
    pub current_supports: Vec<String>,
    pub informal_supports: Option<String>,
    pub notes: Option<String>,
}

impl GoalStrategiesInput {
    pub fn validate(request: GoalStrategiesRequest) -> Result<Self, ValidationError> {
        let participant = Participant::from_input(request.participant)?;

        let goals = text_list(request.goals, "Goal", SHORT_TEXT_MAX)?;
        if goals.is_empty() {
            return Err(ValidationError::rule("At least one goal is required"));
        }

        let plan_budget = match request.plan_budget {
            Some(b) if !b.is_finite() || b < 0.0 => {
                return Err(ValidationError::rule("Plan budget cannot be negative"));
            }
            other => other,
        };

        Ok(Self {
            participant,
            goals,
            plan_budget,
            plan_period: optional_text(request.plan_period, "Plan period", SHORT_TEXT_MAX)?,
            current_supports: text_list(
                request.current_supports,
                "Current support",
                SHORT_TEXT_MAX,
            )?,
            informal_supports: optional_text(
                request.informal_supports,
                "Informal supports",
                LONG_TEXT_MAX,
            )?,
            notes: optional_text(request.notes, "Notes", LONG_TEXT_MAX)?,
        })
    }
}

impl PromptPayload for GoalStrategiesInput {
    fn document(&self) -> PromptDocument {
        let numbered: Vec<String> = self
            .goals
            .iter()
            .enumerate()
            .map(|(i, g)| format!("Goal {}: {g}", i + 1))
            .collect();

        PromptDocument::new()
            .intro("Suggest strategies, supports and milestones for each of the participant's NDIS goals.")
            .section(self.participant.section())
            .section(
                Section::new("Plan")
                    .field("Plan Budget", self.plan_budget.map(format_currency))
                    .field("Plan Period", self.plan_period.as_ref()),
            )
            .section(Section::new("Goals").bullets(&numbered))
            .section(Section::new("Current Funded Supports").bullets(&self.current_supports))
            .section(Section::new("Informal Supports").text(self.informal_supports.as_ref()))
            .section(Section::new("Coordinator Notes").text(self.notes.as_ref()))
    }
}
