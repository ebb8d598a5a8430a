use std::sync::Arc;

use crate::{
    constants::prompts::{question_user_prompt, QUESTION_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::domain::{ContentExcerpt, QuestionRecord},
    services::{
        completion_model::{CompletionModel, CompletionRequest},
        generation_parser::parse_generation,
    },
};

pub const DEFAULT_MAX_TOKENS: u32 = 200;
/// High on purpose: varied questions matter more than reproducible ones.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Turns an excerpt into a [`QuestionRecord`] with one completion call.
/// Neither the call nor the parse is retried.
pub struct QuestionSynthesizer {
    model: Arc<dyn CompletionModel>,
    settings: GenerationSettings,
}

impl QuestionSynthesizer {
    pub fn new(model: Arc<dyn CompletionModel>, settings: GenerationSettings) -> Self {
        Self { model, settings }
    }

    pub fn build_request(&self, excerpt: &ContentExcerpt) -> CompletionRequest {
        CompletionRequest {
            system: QUESTION_SYSTEM_PROMPT.to_string(),
            user: question_user_prompt(excerpt.as_str()),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// `prompt` then `parse` in one call.
    pub async fn synthesize(&self, excerpt: &ContentExcerpt) -> AppResult<QuestionRecord> {
        let generated = self.prompt(excerpt).await?;
        self.parse(&generated)
    }

    /// Raw text of the first candidate, empty when the model returned none.
    pub async fn prompt(&self, excerpt: &ContentExcerpt) -> AppResult<String> {
        let request = self.build_request(excerpt);
        let generated = self.model.complete(&request).await?;
        Ok(generated.unwrap_or_default())
    }

    pub fn parse(&self, generated: &str) -> AppResult<QuestionRecord> {
        parse_generation(generated).map_err(|err| {
            log::error!("Failed to parse the generated question: {}", err);
            log::error!("Generated text: {}", generated);
            AppError::MalformedGeneration(err)
        })
    }
}
