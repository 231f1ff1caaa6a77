use serde::{Deserialize, Serialize};

pub const QUESTION_COUNT: usize = 10;
pub const RESPONSE_COUNT: usize = 4;

/// The quiz shape the model is asked to produce.
///
/// The relay forwards the model's payload untouched; this type is only used
/// to report payloads that drift from the requested shape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResponse {
    pub topic: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub responses: Vec<String>,
    pub answer: u8,
}

impl QuizResponse {
    /// Lists every way this quiz differs from the requested shape.
    pub fn shape_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.questions.len() != QUESTION_COUNT {
            violations.push(format!(
                "expected {} questions, got {}",
                QUESTION_COUNT,
                self.questions.len()
            ));
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.responses.len() != RESPONSE_COUNT {
                violations.push(format!(
                    "question {} has {} responses",
                    i,
                    question.responses.len()
                ));
            }
            if usize::from(question.answer) >= question.responses.len() {
                violations.push(format!(
                    "question {} answer index {} out of range",
                    i, question.answer
                ));
            }
        }

        violations
    }
}
