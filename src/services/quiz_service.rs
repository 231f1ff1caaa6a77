use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::quiz_prompt::build_quiz_prompt,
    errors::{AppError, AppResult},
    models::{
        domain::{Difficulty, QuizResponse},
        dto::request::QuizRequest,
    },
    services::{
        extraction::{is_empty_payload, parse_model_payload},
        model_service::ModelClient,
    },
};

pub struct QuizService {
    model: Arc<dyn ModelClient>,
}

impl QuizService {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Asks the model for a quiz and returns its fenced JSON payload verbatim.
    ///
    /// Exactly one model call is made. The payload's shape is not enforced.
    pub async fn generate_quiz(&self, request: &QuizRequest) -> AppResult<Value> {
        if Difficulty::from_label(&request.difficulty).is_none() {
            log::debug!("Unrecognised difficulty '{}', passing through", request.difficulty);
        }

        let prompt = build_quiz_prompt(&request.difficulty, &request.prompt);
        let text = self.model.generate(&prompt).await?;
        let payload = parse_model_payload(&text)?;

        if is_empty_payload(&payload) {
            return Err(AppError::EmptyResult);
        }

        report_shape_drift(&payload);
        Ok(payload)
    }
}

fn report_shape_drift(payload: &Value) {
    match serde_json::from_value::<QuizResponse>(payload.clone()) {
        Ok(quiz) => {
            let violations = quiz.shape_violations();
            if !violations.is_empty() {
                log::warn!(
                    "Forwarding quiz '{}' that deviates from requested shape: {}",
                    quiz.topic,
                    violations.join("; ")
                );
            }
        }
        Err(e) => log::warn!("Forwarding payload that is not a quiz: {}", e),
    }
}
