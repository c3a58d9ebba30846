//! Recovery of a JSON value from raw model output.

use serde_json::Value;

/// Parses model output that should be JSON but may be wrapped in prose or
/// Markdown code fences.
///
/// Tries the whole text first, then the span from the first `{` to the
/// last `}`, then the first `[` to the last `]`. Returns `None` when none
/// of those parse.
pub fn extract_json(raw: &str) -> Option<Value> {
    let trimmed = strip_code_fence(raw.trim());
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }
    span(trimmed, '{', '}')
        .and_then(|s| serde_json::from_str(s).ok())
        .or_else(|| span(trimmed, '[', ']').and_then(|s| serde_json::from_str(s).ok()))
}

fn span(raw: &str, open: char, close: char) -> Option<&str> {
    let start = raw.find(open)?;
    let end = raw.rfind(close)?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

fn strip_code_fence(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = rest.split_once('\n').map(|(_, b)| b).unwrap_or(rest);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_json() {
        assert_eq!(extract_json(r#"{"a":1}"#), Some(json!({"a": 1})));
    }

    #[test]
    fn strips_code_fence() {
        let raw = "```json\n{\"riskScore\": 20}\n```";
        assert_eq!(extract_json(raw), Some(json!({"riskScore": 20})));
    }

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let raw = "Here is the audit:\n{\"issues\": []}\nLet me know if you need more.";
        assert_eq!(extract_json(raw), Some(json!({"issues": []})));
    }

    #[test]
    fn falls_back_to_array_span() {
        let raw = "Strategies: [\"a\", \"b\"] done";
        assert_eq!(extract_json(raw), Some(json!(["a", "b"])));
    }

    #[test]
    fn returns_none_for_unparseable_text() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} backwards {"), None);
    }
}
