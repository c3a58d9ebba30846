//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number value between 0 and 100 inclusive.
///
/// Deserialization goes through [`Percentage::try_new`], so out-of-range
/// input is rejected rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Neutral midpoint used when a score is unknown.
    pub const MIDPOINT: Self = Self(50);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Rounds and clamps an arbitrary float into range.
    ///
    /// Non-finite input yields `None` so callers can substitute their own default.
    pub fn from_f64_clamped(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self(value.round().clamp(0.0, 100.0) as u8))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0.0,
                100.0,
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the complement (`100 - self`).
    pub fn complement(&self) -> Self {
        Self(100 - self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
        assert_eq!(Percentage::new(42).value(), 42);
    }

    #[test]
    fn from_f64_clamped_rounds_and_clamps() {
        assert_eq!(Percentage::from_f64_clamped(150.0), Some(Percentage::HUNDRED));
        assert_eq!(Percentage::from_f64_clamped(-12.0), Some(Percentage::ZERO));
        assert_eq!(Percentage::from_f64_clamped(72.5).map(|p| p.value()), Some(73));
        assert_eq!(Percentage::from_f64_clamped(f64::NAN), None);
        assert_eq!(Percentage::from_f64_clamped(f64::INFINITY), None);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        assert!(Percentage::try_new(100).is_ok());
        assert!(matches!(
            Percentage::try_new(101),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn complement_subtracts_from_hundred() {
        assert_eq!(Percentage::new(20).complement().value(), 80);
        assert_eq!(Percentage::ZERO.complement(), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Percentage::new(42)).unwrap(), "42");
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }

    #[test]
    fn deserializing_out_of_range_value_fails() {
        let ok: Percentage = serde_json::from_str("42").unwrap();
        assert_eq!(ok.value(), 42);

        assert!(serde_json::from_str::<Percentage>("101").is_err());
        assert!(serde_json::from_str::<Percentage>("255").is_err());
    }
}
