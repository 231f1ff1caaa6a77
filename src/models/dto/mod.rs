pub mod gemini;
pub mod request;
