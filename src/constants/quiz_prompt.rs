use crate::models::domain::Difficulty;

pub const QUIZ_GENERATION_PROMPT: &str = r#"Generate exactly this JSON:

{
  "topic": "short theme string",
  "questions": [
    {
      "question": "string",
      "responses": ["string","string","string","string"],
      "answer": 0
    }
  ]
}

Rules:
- topic = concise theme from input.
- questions = exactly 10.
- each has 4 responses, 1 correct.
- answer = 0-based index of correct response.
- Output only valid JSON, nothing else."#;

/// Builds the full instruction sent to the model for one request.
///
/// `difficulty` and `topic` are embedded as given, wrapped in double braces.
pub fn build_quiz_prompt(difficulty: &str, topic: &str) -> String {
    let levels = Difficulty::ALL
        .iter()
        .map(|d| format!("- {} → {}", d.label(), d.guidance()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{QUIZ_GENERATION_PROMPT}\n\nDifficulty levels:\n{levels}\n\nQuiz difficulty: \"{{{{{difficulty}}}}}\"\nUser topic: \"{{{{{topic}}}}}\""
    )
}
