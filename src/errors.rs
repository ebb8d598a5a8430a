use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::generation_parser::ParseError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Upstream fetch failed with status {status}")]
    UpstreamFetch { status: u16 },

    #[error("No content found for category: {0}")]
    NoContent(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Malformed generation: {0}")]
    MalformedGeneration(#[from] ParseError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidCategory(_) => "INVALID_CATEGORY",
            AppError::UpstreamFetch { .. } => "UPSTREAM_FETCH_ERROR",
            AppError::NoContent(_) => "NO_CONTENT",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::MalformedGeneration(_) => "MALFORMED_GENERATION",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Message shown to the caller. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidCategory(_) => {
                "Invalid category. Please provide a valid category.".to_string()
            }
            AppError::UpstreamFetch { .. } => {
                "Failed to fetch content for the selected category.".to_string()
            }
            AppError::NoContent(_) => "No content found for the selected category.".to_string(),
            AppError::Generation(_) => {
                "An error occurred while generating the question. Please try again later."
                    .to_string()
            }
            AppError::MalformedGeneration(_) => {
                "Invalid response format from the model.".to_string()
            }
            AppError::InvalidRequest(message) => message.clone(),
            AppError::Configuration(_) => "Server is misconfigured.".to_string(),
            AppError::Unknown(_) => "An unknown error occurred.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NoContent(_) => StatusCode::NOT_FOUND,
            // actix can only send real status codes, so anything outside the
            // error range is reported as a bad gateway
            AppError::UpstreamFetch { status } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Generation(_)
            | AppError::MalformedGeneration(_)
            | AppError::Configuration(_)
            | AppError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("request failed [{}]: {}", self.error_code(), self);
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::UpstreamFetch {
                status: status.as_u16(),
            },
            None => AppError::Unknown(format!("HTTP transport error: {}", err)),
        }
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Generation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
