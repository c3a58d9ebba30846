//! Comparison of a selected option against an alternative.

use serde::Serialize;

use super::option::AtOption;
use super::scoring::score;

/// Which option the comparison favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Selected,
    Alternative,
}

/// Five-year cost projection for both options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveYearCost {
    pub selected: f64,
    pub alternative: f64,
}

/// Derived comparison. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub selected_score: i64,
    pub alternative_score: i64,
    pub recommendation: Recommendation,
    /// `selected.cost - alternative.cost`.
    pub cost_difference: f64,
    /// `selected.effectiveness - alternative.effectiveness`.
    pub effectiveness_difference: f64,
    pub five_year_cost: FiveYearCost,
}

/// Scores both options against the pair's maxima.
///
/// Ties favour the selected option.
pub fn compare(selected: &AtOption, alternative: &AtOption) -> ComparisonResult {
    let max_cost = selected.cost.max(alternative.cost);
    let max_maintenance = selected.maintenance_cost.max(alternative.maintenance_cost);

    let selected_score = score(selected, max_cost, max_maintenance);
    let alternative_score = score(alternative, max_cost, max_maintenance);

    let recommendation = if selected_score >= alternative_score {
        Recommendation::Selected
    } else {
        Recommendation::Alternative
    };

    ComparisonResult {
        selected_score,
        alternative_score,
        recommendation,
        cost_difference: selected.cost - alternative.cost,
        effectiveness_difference: selected.effectiveness - alternative.effectiveness,
        five_year_cost: FiveYearCost {
            selected: selected.five_year_cost(),
            alternative: alternative.five_year_cost(),
        },
    }
}
