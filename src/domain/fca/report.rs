//! Normalized FCA report draft.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::Percentage;
use crate::domain::normalize::{
    object_list, pick, quantity_or_zero, score_or_midpoint, string_list, text, unwrap_envelope,
    Normalize,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FcaDomainSummary {
    pub domain: String,
    pub summary: String,
    pub functional_level: Percentage,
    pub support_needs: Vec<String>,
}

/// Estimated weekly support hours. Each leaf defaults to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SupportHours {
    pub weekday: f64,
    pub weekend: f64,
    pub overnight: f64,
}

impl SupportHours {
    fn normalize(raw: Option<&Value>) -> Self {
        let Some(raw) = raw.filter(|v| v.is_object()) else {
            return Self::default();
        };
        Self {
            weekday: quantity_or_zero(pick(raw, &["weekday", "weekdays"])),
            weekend: quantity_or_zero(pick(raw, &["weekend", "weekends"])),
            overnight: quantity_or_zero(pick(raw, &["overnight"])),
        }
    }

    pub fn weekly_total(&self) -> f64 {
        self.weekday + self.weekend + self.overnight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FcaReport {
    pub executive_summary: String,
    pub domains: Vec<FcaDomainSummary>,
    pub recommendations: Vec<String>,
    pub support_hours: SupportHours,
}

impl Normalize for FcaReport {
    fn normalize(raw: &Value) -> Self {
        let raw = unwrap_envelope(raw);
        let domains = object_list(pick(raw, &["domains"]))
            .into_iter()
            .filter_map(|d| {
                let domain = text(pick(d, &["domain", "name"]));
                (!domain.is_empty()).then(|| FcaDomainSummary {
                    domain,
                    summary: text(pick(d, &["summary"])),
                    functional_level: score_or_midpoint(pick(
                        d,
                        &["functionalLevel", "functional_level"],
                    )),
                    support_needs: string_list(pick(d, &["supportNeeds", "support_needs"])),
                })
            })
            .collect();

        Self {
            executive_summary: text(pick(raw, &["executiveSummary", "executive_summary"])),
            domains,
            recommendations: string_list(pick(raw, &["recommendations"])),
            support_hours: SupportHours::normalize(pick(raw, &["supportHours", "support_hours"])),
        }
    }
}
