//! Functional Capacity Assessment (FCA) report drafting.

mod report;
mod request;

pub use report::{FcaDomainSummary, FcaReport, SupportHours};
pub use request::{DomainObservation, DomainObservationInput, FcaInput, FcaRequest};
