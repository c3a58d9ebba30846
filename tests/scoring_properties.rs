//! Property tests for the AT Scoring Engine.

use proptest::prelude::*;

use ndis_assist::domain::assistive_tech::{compare, score, AtOption, Recommendation};

fn option(cost: f64, maintenance: f64, effectiveness: f64, preference: f64) -> AtOption {
    AtOption {
        name: "option".to_string(),
        cost,
        effectiveness,
        preference,
        maintenance_cost: maintenance,
        description: None,
    }
}

prop_compose! {
    fn valid_option()(
        cost in 1.0f64..1_000_000.0,
        maintenance in 0.0f64..100_000.0,
        effectiveness in 0.0f64..=100.0,
        preference in 0.0f64..=100.0,
    ) -> AtOption {
        option(cost, maintenance, effectiveness, preference)
    }
}

proptest! {
    #[test]
    fn scores_stay_within_0_and_100(selected in valid_option(), alternative in valid_option()) {
        let result = compare(&selected, &alternative);
        prop_assert!((0..=100).contains(&result.selected_score));
        prop_assert!((0..=100).contains(&result.alternative_score));
    }

    #[test]
    fn recommendation_follows_scores_with_ties_to_selected(
        selected in valid_option(),
        alternative in valid_option(),
    ) {
        let result = compare(&selected, &alternative);
        let expected = if result.selected_score >= result.alternative_score {
            Recommendation::Selected
        } else {
            Recommendation::Alternative
        };
        prop_assert_eq!(result.recommendation, expected);
    }

    #[test]
    fn identical_options_tie_in_favour_of_selected(option in valid_option()) {
        let result = compare(&option, &option.clone());
        prop_assert_eq!(result.selected_score, result.alternative_score);
        prop_assert_eq!(result.recommendation, Recommendation::Selected);
        prop_assert_eq!(result.cost_difference, 0.0);
    }

    #[test]
    fn higher_effectiveness_never_lowers_score(
        base in valid_option(),
        bump in 0.0f64..=100.0,
    ) {
        let improved = AtOption {
            effectiveness: (base.effectiveness + bump).min(100.0),
            ..base.clone()
        };
        let max_cost = base.cost;
        let max_maintenance = base.maintenance_cost;
        prop_assert!(score(&improved, max_cost, max_maintenance) >= score(&base, max_cost, max_maintenance));
    }

    #[test]
    fn higher_preference_never_lowers_score(
        base in valid_option(),
        bump in 0.0f64..=100.0,
    ) {
        let improved = AtOption {
            preference: (base.preference + bump).min(100.0),
            ..base.clone()
        };
        let max_cost = base.cost;
        let max_maintenance = base.maintenance_cost;
        prop_assert!(score(&improved, max_cost, max_maintenance) >= score(&base, max_cost, max_maintenance));
    }

    #[test]
    fn higher_maintenance_never_raises_score(
        base in valid_option(),
        bump in 0.0f64..100_000.0,
    ) {
        // the pair maximum stays fixed at or above both maintenance values
        let max_maintenance = 200_000.0;
        let pricier = AtOption {
            maintenance_cost: base.maintenance_cost + bump,
            ..base.clone()
        };
        let max_cost = base.cost;
        prop_assert!(score(&pricier, max_cost, max_maintenance) <= score(&base, max_cost, max_maintenance));
    }

    #[test]
    fn cheaper_option_never_scores_lower_on_equal_merits(
        a in valid_option(),
        discount in 0.0f64..1.0,
    ) {
        let cheaper = AtOption { cost: a.cost * discount.max(0.01), ..a.clone() };
        let result = compare(&cheaper, &a);
        prop_assert!(result.selected_score >= result.alternative_score);
    }

    #[test]
    fn zero_maintenance_on_both_earns_full_maintenance_weight(
        cost_a in 1.0f64..100_000.0,
        cost_b in 1.0f64..100_000.0,
        effectiveness in 0.0f64..=100.0,
        preference in 0.0f64..=100.0,
    ) {
        let a = option(cost_a, 0.0, effectiveness, preference);
        let b = option(cost_b, 0.0, effectiveness, preference);
        let result = compare(&a, &b);
        // maintenance contributes its full 15 points
        prop_assert!(result.selected_score >= 15);
        prop_assert!(result.alternative_score >= 15);
    }

    #[test]
    fn five_year_cost_adds_five_years_of_maintenance(
        selected in valid_option(),
        alternative in valid_option(),
    ) {
        let result = compare(&selected, &alternative);
        prop_assert_eq!(result.five_year_cost.selected, selected.cost + 5.0 * selected.maintenance_cost);
        prop_assert_eq!(result.five_year_cost.alternative, alternative.cost + 5.0 * alternative.maintenance_cost);
        prop_assert_eq!(result.cost_difference, selected.cost - alternative.cost);
    }
}
