//! Report quality checker: audit request and normalized assessment.

mod assessment;
mod request;

pub use assessment::{IssueCategory, QualityAssessment, QualityIssue, Severity, PASS_THRESHOLD};
pub use request::{QualityCheckInput, QualityCheckRequest, REPORT_MAX_CHARS};
