//! Participant identity block shared by every feature.

use serde::Deserialize;

use crate::domain::foundation::{optional_text, required_text, ValidationError};
use crate::domain::prompt::Section;

pub(crate) const NAME_MAX: usize = 200;
pub(crate) const SHORT_TEXT_MAX: usize = 500;
pub(crate) const LONG_TEXT_MAX: usize = 20_000;

/// Participant fields as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInput {
    pub participant_name: Option<String>,
    pub ndis_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub primary_disability: Option<String>,
}

/// Validated participant identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub ndis_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub primary_disability: Option<String>,
}

impl Participant {
    /// Validates the identity fields. The name is the only required one.
    pub fn from_input(input: ParticipantInput) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text(input.participant_name, "Participant name", NAME_MAX)?,
            ndis_number: optional_text(input.ndis_number, "NDIS number", NAME_MAX)?,
            date_of_birth: optional_text(input.date_of_birth, "Date of birth", NAME_MAX)?,
            primary_disability: optional_text(
                input.primary_disability,
                "Primary disability",
                SHORT_TEXT_MAX,
            )?,
        })
    }

    /// "Participant" prompt section.
    pub fn section(&self) -> Section {
        Section::new("Participant")
            .field("Name", Some(&self.name))
            .field("NDIS Number", self.ndis_number.as_ref())
            .field("Date of Birth", self.date_of_birth.as_ref())
            .field("Primary Disability", self.primary_disability.as_ref())
    }
}
