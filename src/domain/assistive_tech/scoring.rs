//! Scoring Engine: weighted comparison score for one option.

use super::option::AtOption;

/// Fixed axis weights. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub effectiveness: f64,
    pub cost: f64,
    pub preference: f64,
    pub maintenance: f64,
}

pub const WEIGHTS: ScoringWeights = ScoringWeights {
    effectiveness: 0.40,
    cost: 0.25,
    preference: 0.20,
    maintenance: 0.15,
};

/// Inverts a cost against the larger of the two compared costs.
///
/// A zero maximum means neither option costs anything on this axis, so
/// the option gets the full 100.
fn inverted(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        100.0
    } else {
        (max - value) / max * 100.0
    }
}

/// Scores an option against the maximum cost and maintenance of the pair.
///
/// The result is the rounded weighted sum and is not clamped: inputs
/// outside their documented ranges (negative costs, costs above the
/// supplied maximum) can push it outside [0, 100].
pub fn score(option: &AtOption, max_cost: f64, max_maintenance: f64) -> i64 {
    let cost_score = inverted(option.cost, max_cost);
    let maintenance_score = inverted(option.maintenance_cost, max_maintenance);

    let total = WEIGHTS.effectiveness * option.effectiveness
        + WEIGHTS.cost * cost_score
        + WEIGHTS.preference * option.preference
        + WEIGHTS.maintenance * maintenance_score;

    total.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(cost: f64, maintenance: f64, effectiveness: f64, preference: f64) -> AtOption {
        AtOption {
            name: "opt".into(),
            cost,
            effectiveness,
            preference,
            maintenance_cost: maintenance,
            description: None,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = WEIGHTS.effectiveness + WEIGHTS.cost + WEIGHTS.preference + WEIGHTS.maintenance;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scores_worked_example() {
        let selected = option(5000.0, 200.0, 80.0, 70.0);
        let alternative = option(3000.0, 500.0, 60.0, 50.0);
        // 32 + 0 + 14 + 9
        assert_eq!(score(&selected, 5000.0, 500.0), 55);
        // 24 + 10 + 10 + 0
        assert_eq!(score(&alternative, 5000.0, 500.0), 44);
    }

    #[test]
    fn zero_maintenance_maximum_scores_full_maintenance() {
        let opt = option(1000.0, 0.0, 0.0, 0.0);
        // cost axis 0, maintenance axis 100 * 0.15
        assert_eq!(score(&opt, 1000.0, 0.0), 15);
    }

    #[test]
    fn zero_cost_maximum_does_not_divide_by_zero() {
        let opt = option(0.0, 0.0, 0.0, 0.0);
        assert_eq!(score(&opt, 0.0, 0.0), 40);
    }

    #[test]
    fn perfect_option_scores_hundred() {
        let cheap = option(100.0, 0.0, 100.0, 100.0);
        assert_eq!(score(&cheap, 1_000_000.0, 0.0), 100);
    }

    #[test]
    fn negative_cost_is_not_clamped() {
        let odd = option(-5000.0, 0.0, 100.0, 100.0);
        assert!(score(&odd, 5000.0, 0.0) > 100);
    }
}
