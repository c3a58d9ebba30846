//! Structured (JSON object) reply handling shared by the providers.

use serde_json::Value;

use crate::domain::normalize::extract_json;
use crate::ports::AIError;

/// Instruction appended to the system prompt for providers without a
/// native JSON mode.
pub(crate) const JSON_ONLY_INSTRUCTION: &str =
    "Reply with a single valid JSON object and nothing else. Do not wrap it in code fences.";

/// Parses a model reply that must contain a JSON object.
pub(crate) fn parse_structured(content: &str) -> Result<Value, AIError> {
    match extract_json(content) {
        Some(value @ Value::Object(_)) => Ok(value),
        Some(_) => Err(AIError::parse("expected a JSON object in model reply")),
        None => Err(AIError::parse("model reply did not contain valid JSON")),
    }
}

/// Appends the JSON-only instruction to an optional system prompt.
pub(crate) fn with_json_instruction(system_prompt: Option<&str>) -> String {
    match system_prompt {
        Some(s) if !s.trim().is_empty() => format!("{s}\n\n{JSON_ONLY_INSTRUCTION}"),
        _ => JSON_ONLY_INSTRUCTION.to_string(),
    }
}
