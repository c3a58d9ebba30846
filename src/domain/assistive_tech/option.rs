//! Assistive technology option records.

use serde::{Deserialize, Serialize};

use crate::domain::clinical::{NAME_MAX, SHORT_TEXT_MAX};
use crate::domain::foundation::{optional_text, required_text, ValidationError};

/// Which side of the comparison an option is on. Used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRole {
    Selected,
    Alternative,
}

impl OptionRole {
    fn label(&self) -> &'static str {
        match self {
            OptionRole::Selected => "Selected AT",
            OptionRole::Alternative => "Alternative AT",
        }
    }
}

/// An option as received on the wire; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtOptionInput {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub effectiveness: Option<f64>,
    pub preference: Option<f64>,
    pub maintenance_cost: Option<f64>,
    pub description: Option<String>,
}

/// A validated assistive technology option. Lives for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtOption {
    pub name: String,
    pub cost: f64,
    pub effectiveness: f64,
    pub preference: f64,
    pub maintenance_cost: f64,
    pub description: Option<String>,
}

impl AtOption {
    /// Validates an option.
    ///
    /// Cost must be greater than zero so the cost axis always has a
    /// non-zero maximum. Effectiveness and preference must lie in
    /// [0, 100]; maintenance cost defaults to 0 and must not be negative.
    pub fn from_input(input: AtOptionInput, role: OptionRole) -> Result<Self, ValidationError> {
        let label = role.label();
        let name = required_text(input.name, &format!("{label} name"), NAME_MAX)?;

        let cost = input
            .cost
            .filter(|c| c.is_finite())
            .ok_or_else(|| ValidationError::required(format!("{label} cost")))?;
        if cost <= 0.0 {
            return Err(ValidationError::not_positive(format!("{label} cost")));
        }

        let effectiveness = rating(input.effectiveness, &format!("{label} effectiveness"))?;
        let preference = rating(input.preference, &format!("{label} preference"))?;

        let maintenance_cost = input.maintenance_cost.unwrap_or(0.0);
        if !maintenance_cost.is_finite() || maintenance_cost < 0.0 {
            return Err(ValidationError::rule(format!(
                "{label} maintenance cost cannot be negative"
            )));
        }

        Ok(Self {
            name,
            cost,
            effectiveness,
            preference,
            maintenance_cost,
            description: optional_text(
                input.description,
                &format!("{label} description"),
                SHORT_TEXT_MAX,
            )?,
        })
    }

    /// Up-front cost plus five years of maintenance.
    pub fn five_year_cost(&self) -> f64 {
        self.cost + 5.0 * self.maintenance_cost
    }
}

fn rating(value: Option<f64>, field: &str) -> Result<f64, ValidationError> {
    let v = value.ok_or_else(|| ValidationError::required(field))?;
    if !(0.0..=100.0).contains(&v) {
        return Err(ValidationError::out_of_range(field, 0.0, 100.0, v));
    }
    Ok(v)
}
