use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_model::{CompletionModel, OpenAiCompletionModel},
        content_fetcher::ContentFetcher,
        page_source::{HttpPageSource, PageSource},
        question_service::QuestionService,
        question_synthesizer::QuestionSynthesizer,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let page_source: Arc<dyn PageSource> = Arc::new(HttpPageSource::default());
        let model: Arc<dyn CompletionModel> = Arc::new(OpenAiCompletionModel::new(
            &config.openai_api_key,
            config.openai_api_base.as_deref(),
            config.openai_model.clone(),
        ));

        Self::with_sources(config, page_source, model)
    }

    /// Wires the pipeline around the given outbound seams.
    pub fn with_sources(
        config: Config,
        page_source: Arc<dyn PageSource>,
        model: Arc<dyn CompletionModel>,
    ) -> Self {
        let fetcher = ContentFetcher::new(page_source, config.upstream_base_url.clone());
        let synthesizer = QuestionSynthesizer::new(model, config.generation_settings());

        Self {
            question_service: Arc::new(QuestionService::new(fetcher, synthesizer)),
            config: Arc::new(config),
        }
    }
}
