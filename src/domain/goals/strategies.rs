//! Normalized goal strategies.

use serde::Serialize;
use serde_json::Value;

use crate::domain::normalize::{object_list, pick, string_list, text, unwrap_envelope, Normalize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalPlan {
    pub goal: String,
    pub strategies: Vec<String>,
    pub supports: Vec<String>,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStrategies {
    pub overall_summary: String,
    pub budget_considerations: String,
    pub goals: Vec<GoalPlan>,
}

impl Normalize for GoalStrategies {
    fn normalize(raw: &Value) -> Self {
        let raw = unwrap_envelope(raw);
        let goals = object_list(pick(raw, &["goals"]))
            .into_iter()
            .filter_map(|g| {
                let goal = text(pick(g, &["goal", "title"]));
                (!goal.is_empty()).then(|| GoalPlan {
                    goal,
                    strategies: string_list(pick(g, &["strategies"])),
                    supports: string_list(pick(g, &["supports"])),
                    milestones: string_list(pick(g, &["milestones"])),
                })
            })
            .collect();
        Self {
            overall_summary: text(pick(raw, &["overallSummary", "overall_summary"])),
            budget_considerations: text(pick(
                raw,
                &["budgetConsiderations", "budget_considerations"],
            )),
            goals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn goal_lists_default_to_empty() {
        let out = GoalStrategies::normalize(&json!({
            "goals": [{"goal": "Catch the bus", "strategies": ["Travel training"], "supports": null}]
        }));
        assert_eq!(out.goals.len(), 1);
        assert_eq!(out.goals[0].strategies, vec!["Travel training".to_string()]);
        assert!(out.goals[0].supports.is_empty());
        assert!(out.goals[0].milestones.is_empty());
    }

    #[test]
    fn goals_of_wrong_shape_become_empty() {
        let out = GoalStrategies::normalize(&json!({"goals": "see above", "overallSummary": "ok"}));
        assert!(out.goals.is_empty());
        assert_eq!(out.overall_summary, "ok");
    }
}
