//! Case notes drafted from a support coordination activity log.

mod draft;
mod request;

pub use draft::{ActivityStats, CaseNoteDraft};
pub use request::{
    Activity, ActivityInput, ActivityKind, CaseNotesInput, CaseNotesRequest, MAX_ACTIVITIES,
};
