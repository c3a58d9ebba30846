//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, auth)
//! - `access` - Roles, capability table and access policy
//! - `prompt` - Prompt Synthesizer (structured prompt documents, templates)
//! - `normalize` - Response Normalizer (default-and-clamp over model output)
//! - `clinical` - Participant identity and assessment scores shared by features
//! - `assistive_tech` - AT comparison scoring and justification drafts
//! - `quality` - Report quality audit
//! - `fca` - Functional Capacity Assessment drafts
//! - `goals` - Support coordination goal strategies
//! - `case_notes` - Case notes from activity logs
//! - `activity` - Presence and audit records

pub mod access;
pub mod activity;
pub mod assistive_tech;
pub mod case_notes;
pub mod clinical;
pub mod fca;
pub mod foundation;
pub mod goals;
pub mod normalize;
pub mod prompt;
pub mod quality;
