//! Clinical building blocks shared across features.

mod assessment;
mod participant;

pub use assessment::{AssessmentScore, AssessmentScoreInput};
pub use participant::{Participant, ParticipantInput};
pub(crate) use participant::{LONG_TEXT_MAX, NAME_MAX, SHORT_TEXT_MAX};
