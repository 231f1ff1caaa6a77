pub mod extraction;
pub mod model_service;
pub mod quiz_service;

pub use extraction::{extract_json_block, is_empty_payload, parse_model_payload};
pub use model_service::{GeminiClient, ModelClient};
pub use quiz_service::QuizService;
