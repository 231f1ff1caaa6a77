#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    /// A well-formed quiz: 10 questions, 4 responses each.
    pub fn sample_quiz(topic: &str) -> Value {
        let questions: Vec<Value> = (0..10)
            .map(|i| {
                json!({
                    "question": format!("{} question {}?", topic, i + 1),
                    "responses": ["A", "B", "C", "D"],
                    "answer": i % 4
                })
            })
            .collect();

        json!({ "topic": topic, "questions": questions })
    }

    /// Wraps a value in a ```` ```json ```` fence the way the model does.
    pub fn fenced(value: &Value) -> String {
        format!("```json\n{}\n```", value)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_quiz_shape() {
        let quiz = sample_quiz("Space");
        assert_eq!(quiz["topic"], "Space");
        assert_eq!(quiz["questions"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_fenced_wraps_value() {
        let text = fenced(&serde_json::json!({ "a": 1 }));
        assert_eq!(text, "```json\n{\"a\":1}\n```");
    }
}
