//! Response Normalizer.
//!
//! Model output is untrusted: fields may be missing, mistyped or nested
//! differently than requested. Every typed output is built through
//! [`Normalize`], which defaults and clamps each field it reads.

mod fields;
mod json;

pub use fields::{
    count_or_zero, number, object_list, pick, quantity_or_zero, score_or_midpoint, string_list,
    text, unwrap_envelope,
};
pub use json::extract_json;

use serde_json::Value;

/// Builds a safe, fully-populated value from raw model output.
pub trait Normalize: Sized {
    /// Never fails: every field has a default.
    fn normalize(raw: &Value) -> Self;
}
