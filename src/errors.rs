use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid format";
pub const MODEL_REQUEST_MESSAGE: &str = "Error when requesting model";

/// Failures on the way from the upstream model to a parsed payload.
///
/// Callers only ever see one generic message for these; the variant is kept
/// for the log line.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("Upstream call failed: {0}")]
    UpstreamCallFailed(String),

    #[error("Upstream response shape invalid: {0}")]
    ResponseShapeInvalid(String),

    #[error("No fenced json block in model output")]
    BlockNotFound,

    #[error("Fenced json block did not parse: {0}")]
    JsonParseFailed(String),
}

impl ModelError {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::UpstreamCallFailed(_) => "UPSTREAM_CALL_FAILED",
            ModelError::ResponseShapeInvalid(_) => "RESPONSE_SHAPE_INVALID",
            ModelError::BlockNotFound => "BLOCK_NOT_FOUND",
            ModelError::JsonParseFailed(_) => "JSON_PARSE_FAILED",
        }
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ModelError::ResponseShapeInvalid(err.to_string())
        } else {
            ModelError::UpstreamCallFailed(err.to_string())
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidFormat(String),

    #[error("Model returned an empty payload")]
    EmptyResult,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// The fixed message written to the wire for this error.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidFormat(_) | AppError::EmptyResult => INVALID_FORMAT_MESSAGE,
            AppError::Model(_) => MODEL_REQUEST_MESSAGE,
            AppError::Config(_) => "Internal server error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyResult => StatusCode::BAD_REQUEST,
            AppError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidFormat(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
