use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::ModelError;

static JSON_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```json([\s\S]*?)```").expect("JSON_BLOCK_REGEX is a valid regex pattern")
});

/// Returns the trimmed contents of the first ```` ```json ```` fenced block.
pub fn extract_json_block(text: &str) -> Option<&str> {
    JSON_BLOCK_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Extracts and parses the fenced JSON payload from model output.
pub fn parse_model_payload(text: &str) -> Result<Value, ModelError> {
    let block = extract_json_block(text).ok_or(ModelError::BlockNotFound)?;
    serde_json::from_str(block).map_err(|e| ModelError::JsonParseFailed(e.to_string()))
}

/// `null`, `false`, `0` and `""` count as an empty payload.
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
