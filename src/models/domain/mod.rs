pub mod difficulty;
pub mod quiz;

pub use difficulty::Difficulty;
pub use quiz::{QuizQuestion, QuizResponse};
