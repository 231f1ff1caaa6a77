use std::env;
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_GEMINI_MODEL_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub gemini_api_key: SecretString,
    pub gemini_model_url: String,
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            gemini_api_key: SecretString::from(
                env::var("GOOGLE_GEMINI_API_KEY").unwrap_or_default(),
            ),
            gemini_model_url: env::var("GEMINI_MODEL_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL_URL.to_string()),
            allowed_origin: env::var("APP_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }

    /// Checks the values the service cannot run without.
    pub fn validate(&self) -> AppResult<()> {
        if self.gemini_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::Config(
                "GOOGLE_GEMINI_API_KEY is not set".to_string(),
            ));
        }

        if self.allowed_origin.trim().is_empty() {
            return Err(AppError::Config("APP_ORIGIN is empty".to_string()));
        }

        // actix-cors refuses a wildcard or a non-header value as a single origin
        if self.allowed_origin == "*"
            || actix_web::http::header::HeaderValue::from_str(&self.allowed_origin).is_err()
        {
            return Err(AppError::Config(format!(
                "APP_ORIGIN must be a single origin, got {:?}",
                self.allowed_origin
            )));
        }

        if !self.gemini_model_url.starts_with("http") {
            return Err(AppError::Config(format!(
                "GEMINI_MODEL_URL is not an http(s) url: {}",
                self.gemini_model_url
            )));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_model_url: "http://127.0.0.1:9/generateContent".to_string(),
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.gemini_model_url.is_empty());
    }

    #[test]
    fn test_test_config_is_valid() {
        let config = Config::test_config();

        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 3000));
    }

    #[test]
    fn validate_rejects_missing_api_key() {
        let config = Config {
            gemini_api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };

        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn validate_rejects_empty_origin() {
        let config = Config {
            allowed_origin: "  ".to_string(),
            ..Config::test_config()
        };

        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn validate_rejects_wildcard_origin() {
        let config = Config {
            allowed_origin: "*".to_string(),
            ..Config::test_config()
        };

        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn debug_output_does_not_leak_api_key() {
        let config = Config::test_config();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("test_gemini_key"));
    }
}
