use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::ModelError,
    models::dto::gemini::{GenerateContentRequest, GenerateContentResponse},
};

pub const API_KEY_HEADER: &str = "X-goog-api-key";

/// A generative-language backend that turns one prompt into one text answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Gemini `generateContent` over HTTPS.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            endpoint: config.gemini_model_url.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::UpstreamCallFailed(format!(
                "model endpoint returned {}",
                status
            )));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::ResponseShapeInvalid(e.to_string()))?;

        envelope
            .first_text()
            .map(str::to_owned)
            .ok_or_else(|| {
                ModelError::ResponseShapeInvalid(
                    "missing candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}
