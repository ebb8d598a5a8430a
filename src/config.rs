use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};
use crate::services::question_synthesizer::{
    GenerationSettings, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://controller.lacity.gov";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub upstream_base_url: String,
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub generation_max_tokens: u32,
    pub generation_temperature: f32,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Reads the process environment. `OPENAI_API_KEY` is required; every
    /// other value has a default.
    pub fn from_env() -> AppResult<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from)
            .ok_or_else(|| {
                AppError::Configuration(
                    "Missing OpenAI API key. Please ensure OPENAI_API_KEY is set in the environment variables."
                        .to_string(),
                )
            })?;

        Ok(Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            openai_api_key,
            openai_api_base: env::var("OPENAI_API_BASE").ok(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            generation_max_tokens: env::var("GENERATION_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
            generation_temperature: env::var("GENERATION_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            max_tokens: self.generation_max_tokens,
            temperature: self.generation_temperature,
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            upstream_base_url: "http://127.0.0.1:9".to_string(),
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: Some("http://127.0.0.1:9/v1".to_string()),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            generation_max_tokens: DEFAULT_MAX_TOKENS,
            generation_temperature: DEFAULT_TEMPERATURE,
            cors_allowed_origin: None,
        }
    }
}
