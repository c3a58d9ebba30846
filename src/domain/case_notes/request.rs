//! Case note request built from a support coordination activity log.

use serde::Deserialize;
use std::fmt;

use crate::domain::clinical::{Participant, ParticipantInput, LONG_TEXT_MAX, NAME_MAX, SHORT_TEXT_MAX};
use crate::domain::foundation::{optional_text, required_text, ValidationError};
use crate::domain::prompt::{format_number, PromptDocument, PromptPayload, Section, Table};

/// Most activities accepted in one case note.
pub const MAX_ACTIVITIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    PhoneCall,
    Email,
    Meeting,
    HomeVisit,
    Other,
}

impl ActivityKind {
    /// Unrecognised or missing kinds become `Other`.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let normalized = raw
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
            .replace([' ', '-'], "_");
        match normalized.as_str() {
            "phone" | "phone_call" | "call" => ActivityKind::PhoneCall,
            "email" => ActivityKind::Email,
            "meeting" => ActivityKind::Meeting,
            "home_visit" | "visit" => ActivityKind::HomeVisit,
            _ => ActivityKind::Other,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityKind::PhoneCall => "Phone call",
            ActivityKind::Email => "Email",
            ActivityKind::Meeting => "Meeting",
            ActivityKind::HomeVisit => "Home visit",
            ActivityKind::Other => "Other",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
    pub duration_minutes: Option<f64>,
    pub description: Option<String>,
    pub outcome: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub date: Option<String>,
    pub duration_minutes: Option<f64>,
    pub description: String,
    pub outcome: Option<String>,
}

/// Request body for `POST /api/case-notes`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseNotesRequest {
    #[serde(flatten)]
    pub participant: ParticipantInput,
    pub reporting_period: Option<String>,
    pub coordinator_name: Option<String>,
    pub activities: Option<Vec<ActivityInput>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseNotesInput {
    pub participant: Participant,
    pub reporting_period: Option<String>,
    pub coordinator_name: Option<String>,
    pub activities: Vec<Activity>,
}

impl CaseNotesInput {
    pub fn validate(request: CaseNotesRequest) -> Result<Self, ValidationError> {
        let participant = Participant::from_input(request.participant)?;

        let raw = request.activities.unwrap_or_default();
        if raw.is_empty() {
            return Err(ValidationError::rule("At least one activity is required"));
        }
        if raw.len() > MAX_ACTIVITIES {
            return Err(ValidationError::rule(format!(
                "No more than {MAX_ACTIVITIES} activities can be summarised at once"
            )));
        }

        let activities = raw
            .into_iter()
            .map(|a| {
                let duration_minutes = match a.duration_minutes {
                    Some(d) if !d.is_finite() || d < 0.0 => {
                        return Err(ValidationError::rule(
                            "Activity duration cannot be negative",
                        ))
                    }
                    other => other,
                };
                Ok(Activity {
                    kind: ActivityKind::parse_lenient(a.kind.as_deref()),
                    date: optional_text(a.date, "Activity date", NAME_MAX)?,
                    duration_minutes,
                    description: required_text(
                        a.description,
                        "Activity description",
                        LONG_TEXT_MAX,
                    )?,
                    outcome: optional_text(a.outcome, "Activity outcome", SHORT_TEXT_MAX)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            participant,
            reporting_period: optional_text(
                request.reporting_period,
                "Reporting period",
                NAME_MAX,
            )?,
            coordinator_name: optional_text(request.coordinator_name, "Coordinator name", NAME_MAX)?,
            activities,
        })
    }
}

impl PromptPayload for CaseNotesInput {
    fn document(&self) -> PromptDocument {
        let log = self.activities.iter().fold(
            Table::new(["Date", "Type", "Minutes", "Description", "Outcome"]),
            |t, a| {
                t.row([
                    a.date.clone().unwrap_or_default(),
                    a.kind.to_string(),
                    a.duration_minutes.map(format_number).unwrap_or_default(),
                    a.description.clone(),
                    a.outcome.clone().unwrap_or_default(),
                ])
            },
        );

        PromptDocument::new()
            .intro("Write a support coordination case note summarising the activity log below.")
            .section(self.participant.section())
            .section(
                Section::new("Reporting Details")
                    .field("Reporting Period", self.reporting_period.as_ref())
                    .field("Support Coordinator", self.coordinator_name.as_ref()),
            )
            .section(Section::new("Activity Log").table(log))
    }
}
