use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{GeminiClient, ModelClient, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("failed to build http client: {}", e)))?;

        let model = Arc::new(GeminiClient::new(http, &config));
        log::info!("Model endpoint: {}", model.endpoint());

        Ok(Self::with_model_client(config, model))
    }

    pub fn with_model_client(config: Config, model: Arc<dyn ModelClient>) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(model)),
            config: Arc::new(config),
        }
    }
}
