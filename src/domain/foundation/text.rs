//! Helpers for validating free-text request fields.

use super::ValidationError;

/// Trims a required text field, rejecting absent or blank input.
pub fn required_text(
    value: Option<String>,
    label: &str,
    max_len: usize,
) -> Result<String, ValidationError> {
    match optional_text(value, label, max_len)? {
        Some(v) => Ok(v),
        None => Err(ValidationError::required(label)),
    }
}

/// Trims an optional text field. Blank input is treated as absent.
pub fn optional_text(
    value: Option<String>,
    label: &str,
    max_len: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > max_len {
        return Err(ValidationError::too_long(label, max_len));
    }
    Ok(Some(trimmed.to_string()))
}

/// Trims every entry of an optional list, dropping blanks.
pub fn text_list(
    values: Option<Vec<String>>,
    label: &str,
    max_len: usize,
) -> Result<Vec<String>, ValidationError> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| optional_text(Some(v), label, max_len).transpose())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank() {
        let err = required_text(Some("   ".into()), "Report content", 10).unwrap_err();
        assert_eq!(err.to_string(), "Report content is required");
    }

    #[test]
    fn required_text_rejects_missing() {
        assert!(required_text(None, "Participant name", 10).is_err());
    }

    #[test]
    fn required_text_trims() {
        assert_eq!(
            required_text(Some("  Sam  ".into()), "Participant name", 10).unwrap(),
            "Sam"
        );
    }

    #[test]
    fn optional_text_enforces_length_on_chars() {
        assert!(optional_text(Some("ééé".into()), "Notes", 3).unwrap().is_some());
        let err = optional_text(Some("abcd".into()), "Notes", 3).unwrap_err();
        assert_eq!(err, ValidationError::too_long("Notes", 3));
    }

    #[test]
    fn text_list_drops_blank_entries() {
        let list = text_list(
            Some(vec!["walk".into(), " ".into(), " cook ".into()]),
            "Goal",
            50,
        )
        .unwrap();
        assert_eq!(list, vec!["walk".to_string(), "cook".to_string()]);
    }
}
