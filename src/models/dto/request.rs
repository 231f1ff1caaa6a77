use serde_json::{Number, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    errors::{AppError, AppResult},
    services::extraction::is_empty_payload,
};

/// Body of `POST /quiz`.
///
/// Fields are kept as raw JSON: any value that is present and truthy passes,
/// whatever its type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizRequestDto {
    pub prompt: Option<Value>,
    pub difficulty: Option<Value>,
}

/// A request that passed validation, with both fields rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub prompt: String,
    pub difficulty: String,
}

impl QuizRequestDto {
    pub fn new(prompt: impl Into<Value>, difficulty: impl Into<Value>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            difficulty: Some(difficulty.into()),
        }
    }

    /// Reads the fields out of a JSON object. Any other body has no fields.
    pub fn from_body(body: Value) -> AppResult<Self> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                prompt: fields.remove("prompt"),
                difficulty: fields.remove("difficulty"),
            }),
            other => Err(AppError::InvalidFormat(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }
}

impl Validate for QuizRequestDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut valid = true;

        for (field, value) in [("prompt", &self.prompt), ("difficulty", &self.difficulty)] {
            if value.as_ref().map_or(true, is_empty_payload) {
                errors.add(field, ValidationError::new("required"));
                valid = false;
            }
        }

        if valid {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl TryFrom<QuizRequestDto> for QuizRequest {
    type Error = ValidationErrors;

    fn try_from(dto: QuizRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        Ok(QuizRequest {
            prompt: dto.prompt.as_ref().map(template_text).unwrap_or_default(),
            difficulty: dto.difficulty.as_ref().map(template_text).unwrap_or_default(),
        })
    }
}

/// Renders a JSON value the way a JavaScript template literal would.
fn template_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => template_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
