//! Assistive technology (AT) justification: option validation, the
//! Scoring Engine, comparison and the normalized justification draft.

mod comparison;
mod justification;
mod option;
mod request;
mod scoring;

pub use comparison::{compare, ComparisonResult, FiveYearCost, Recommendation};
pub use justification::AtJustification;
pub use option::{AtOption, AtOptionInput, OptionRole};
pub use request::{AtJustificationInput, AtJustificationRequest};
pub use scoring::{score, ScoringWeights, WEIGHTS};
