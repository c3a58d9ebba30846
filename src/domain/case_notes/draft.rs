//! Normalized case note draft.

use serde::Serialize;
use serde_json::Value;

use crate::domain::normalize::{count_or_zero, pick, string_list, text, unwrap_envelope, Normalize};

/// Activity counts reported alongside the note. Each leaf defaults to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub total_activities: u32,
    pub phone_calls: u32,
    pub emails: u32,
    pub meetings: u32,
    pub total_minutes: u32,
}

impl ActivityStats {
    fn normalize(raw: Option<&Value>) -> Self {
        let Some(raw) = raw.filter(|v| v.is_object()) else {
            return Self::default();
        };
        Self {
            total_activities: count_or_zero(pick(raw, &["totalActivities", "total_activities"])),
            phone_calls: count_or_zero(pick(raw, &["phoneCalls", "phone_calls"])),
            emails: count_or_zero(pick(raw, &["emails"])),
            meetings: count_or_zero(pick(raw, &["meetings"])),
            total_minutes: count_or_zero(pick(raw, &["totalMinutes", "total_minutes"])),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseNoteDraft {
    pub case_note: String,
    pub key_points: Vec<String>,
    pub follow_ups: Vec<String>,
    pub activity_stats: ActivityStats,
}

impl Normalize for CaseNoteDraft {
    fn normalize(raw: &Value) -> Self {
        let raw = unwrap_envelope(raw);
        Self {
            case_note: text(pick(raw, &["caseNote", "case_note", "note"])),
            key_points: string_list(pick(raw, &["keyPoints", "key_points"])),
            follow_ups: string_list(pick(raw, &["followUps", "follow_ups"])),
            activity_stats: ActivityStats::normalize(pick(
                raw,
                &["activityStats", "activity_stats"],
            )),
        }
    }
}
