//! Standardised assessment scores.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{optional_text, required_text, ValidationError};
use crate::domain::prompt::{format_number, Table};

use super::participant::NAME_MAX;

/// One assessment tool result as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScoreInput {
    pub tool: Option<String>,
    pub baseline: Option<f64>,
    pub with_intervention: Option<f64>,
    pub scale: Option<String>,
}

/// A tool result with and without the proposed intervention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScore {
    pub tool: String,
    pub baseline: f64,
    pub with_intervention: f64,
    pub scale: Option<String>,
}

impl AssessmentScore {
    pub fn from_input(input: AssessmentScoreInput) -> Result<Self, ValidationError> {
        let tool = required_text(input.tool, "Assessment tool", NAME_MAX)?;
        let baseline = finite(input.baseline, &tool, "baseline")?;
        let with_intervention = finite(input.with_intervention, &tool, "withIntervention")?;
        Ok(Self {
            tool,
            baseline,
            with_intervention,
            scale: optional_text(input.scale, "Assessment scale", NAME_MAX)?,
        })
    }

    /// Validates a whole list; an absent list is empty.
    pub fn list(inputs: Option<Vec<AssessmentScoreInput>>) -> Result<Vec<Self>, ValidationError> {
        inputs
            .unwrap_or_default()
            .into_iter()
            .map(Self::from_input)
            .collect()
    }

    pub fn change(&self) -> f64 {
        self.with_intervention - self.baseline
    }

    /// Renders scores as a table with a signed change column.
    pub fn table(scores: &[Self]) -> Table {
        scores.iter().fold(
            Table::new(["Tool", "Baseline", "With Intervention", "Change", "Scale"]),
            |table, s| {
                let change = s.change();
                let sign = if change > 0.0 { "+" } else { "" };
                table.row([
                    s.tool.clone(),
                    format_number(s.baseline),
                    format_number(s.with_intervention),
                    format!("{sign}{}", format_number(change)),
                    s.scale.clone().unwrap_or_default(),
                ])
            },
        )
    }
}

fn finite(value: Option<f64>, tool: &str, field: &str) -> Result<f64, ValidationError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::rule(format!(
            "Assessment score '{tool}' needs a numeric {field}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::{PromptDocument, Section};

    fn input(tool: &str, baseline: f64, with: f64) -> AssessmentScoreInput {
        AssessmentScoreInput {
            tool: Some(tool.into()),
            baseline: Some(baseline),
            with_intervention: Some(with),
            scale: None,
        }
    }

    #[test]
    fn missing_baseline_is_rejected() {
        let err = AssessmentScore::from_input(AssessmentScoreInput {
            tool: Some("COPM".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Assessment score 'COPM' needs a numeric baseline");
    }

    #[test]
    fn table_shows_signed_change() {
        let scores = AssessmentScore::list(Some(vec![input("COPM", 3.0, 7.5)])).unwrap();
        let text = PromptDocument::new()
            .section(Section::new("Scores").table(AssessmentScore::table(&scores)))
            .render();
        assert!(text.contains("| COPM | 3 | 7.5 | +4.5 |"));
        assert!(!text.contains("Scale"));
    }

    #[test]
    fn absent_list_is_empty() {
        assert!(AssessmentScore::list(None).unwrap().is_empty());
    }
}
