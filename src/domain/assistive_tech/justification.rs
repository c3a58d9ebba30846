//! Normalized justification draft returned by the model.

use serde::Serialize;
use serde_json::Value;

use crate::domain::normalize::{pick, string_list, text, unwrap_envelope, Normalize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtJustification {
    pub summary: String,
    pub clinical_rationale: String,
    pub value_for_money: String,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Normalize for AtJustification {
    fn normalize(raw: &Value) -> Self {
        let raw = unwrap_envelope(raw);
        Self {
            summary: text(pick(raw, &["summary"])),
            clinical_rationale: text(pick(raw, &["clinicalRationale", "clinical_rationale"])),
            value_for_money: text(pick(raw, &["valueForMoney", "value_for_money"])),
            risks: string_list(pick(raw, &["risks"])),
            recommendations: string_list(pick(raw, &["recommendations"])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_empty() {
        let j = AtJustification::normalize(&json!({"summary": "Funding supported"}));
        assert_eq!(j.summary, "Funding supported");
        assert!(j.clinical_rationale.is_empty());
        assert!(j.risks.is_empty());
    }

    #[test]
    fn accepts_snake_case_and_wrong_list_shapes() {
        let j = AtJustification::normalize(&json!({
            "value_for_money": "Lower five-year cost",
            "risks": "none",
            "recommendations": ["Trial for 4 weeks"]
        }));
        assert_eq!(j.value_for_money, "Lower five-year cost");
        assert!(j.risks.is_empty());
        assert_eq!(j.recommendations, vec!["Trial for 4 weeks".to_string()]);
    }

    #[test]
    fn non_object_output_normalizes_to_default() {
        assert_eq!(AtJustification::normalize(&json!([1, 2])), AtJustification::default());
    }
}
