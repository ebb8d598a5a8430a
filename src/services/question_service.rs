use std::fmt;

use crate::{
    errors::AppResult,
    models::domain::{OptionLabel, QuestionRecord},
    services::{
        content_fetcher::{parse_category, ContentFetcher},
        question_synthesizer::QuestionSynthesizer,
    },
};

/// Where a single request currently is. Nothing carries over between
/// requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Fetching,
    Extracting,
    Prompting,
    Parsing,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Fetching => "fetching",
            PipelineStage::Extracting => "extracting",
            PipelineStage::Prompting => "prompting",
            PipelineStage::Parsing => "parsing",
            PipelineStage::Done => "done",
        };
        f.write_str(name)
    }
}

struct PipelineRun<'a> {
    category: &'a str,
    stage: PipelineStage,
}

impl<'a> PipelineRun<'a> {
    fn start(category: &'a str) -> Self {
        Self {
            category,
            stage: PipelineStage::Idle,
        }
    }

    fn enter(&mut self, stage: PipelineStage) {
        log::debug!("[{}] {} -> {}", self.category, self.stage, stage);
        self.stage = stage;
    }

    fn track<T>(&self, result: AppResult<T>) -> AppResult<T> {
        if let Err(err) = &result {
            log::warn!("[{}] failed while {}: {}", self.category, self.stage, err);
        }
        result
    }
}

/// Category in, question out: fetch, extract, prompt, parse.
pub struct QuestionService {
    fetcher: ContentFetcher,
    synthesizer: QuestionSynthesizer,
}

impl QuestionService {
    pub fn new(fetcher: ContentFetcher, synthesizer: QuestionSynthesizer) -> Self {
        Self {
            fetcher,
            synthesizer,
        }
    }

    pub async fn generate_question(&self, category: &str) -> AppResult<QuestionRecord> {
        let mut run = PipelineRun::start(category);

        let category = run.track(parse_category(category))?;

        run.enter(PipelineStage::Fetching);
        let html = run.track(self.fetcher.fetch_page(category).await)?;

        run.enter(PipelineStage::Extracting);
        let excerpt = run.track(self.fetcher.extract(category, &html))?;

        run.enter(PipelineStage::Prompting);
        let generated = run.track(self.synthesizer.prompt(&excerpt).await)?;

        run.enter(PipelineStage::Parsing);
        let record = run.track(self.synthesizer.parse(&generated))?;

        run.enter(PipelineStage::Done);
        log::info!("Generated question for category '{}'", category);
        Ok(record)
    }

    /// Scores a submitted label against the record the client holds.
    pub fn check_answer(
        record: &QuestionRecord,
        selected: OptionLabel,
    ) -> (bool, Option<OptionLabel>) {
        let correct_label = record.correct_label();
        (correct_label == Some(selected), correct_label)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::AppError;
    use crate::models::domain::QuestionOptions;
    use crate::services::{
        completion_model::MockCompletionModel,
        page_source::MockPageSource,
        question_synthesizer::GenerationSettings,
    };

    const PAGE: &str = "<html><body><h1>Budget</h1><p>The city adopted a $13 billion budget in 2021.</p></body></html>";
    const GENERATED: &str = "Question: How large was the adopted budget?
Options:
A. $9 billion
B. $11 billion
C. $13 billion
D. $15 billion
Correct Answer: C. $13 billion";

    fn service(page: MockPageSource, model: MockCompletionModel) -> QuestionService {
        QuestionService::new(
            ContentFetcher::new(Arc::new(page), "https://controller.lacity.gov"),
            QuestionSynthesizer::new(Arc::new(model), GenerationSettings::default()),
        )
    }

    fn page_returning(html: &'static str) -> MockPageSource {
        let mut page = MockPageSource::new();
        page.expect_fetch_page()
            .times(1)
            .returning(move |_| Ok(html.to_string()));
        page
    }

    fn model_returning(reply: &'static str) -> MockCompletionModel {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .returning(move |_| Ok(Some(reply.to_string())));
        model
    }

    #[actix_web::test]
    async fn generates_question_end_to_end() {
        let mut model = MockCompletionModel::new();
        model
            .expect_complete()
            .withf(|request| request.user.contains("The city adopted a $13 billion budget in 2021."))
            .times(1)
            .returning(|_| Ok(Some(GENERATED.to_string())));

        let record = service(page_returning(PAGE), model)
            .generate_question("BUDGET")
            .await
            .unwrap();

        assert_eq!(record.question, "How large was the adopted budget?");
        assert_eq!(record.options.c, "$13 billion");
        assert_eq!(record.correct_answer, "C. $13 billion");
    }

    #[actix_web::test]
    async fn invalid_category_calls_nothing() {
        let mut page = MockPageSource::new();
        page.expect_fetch_page().times(0);
        let mut model = MockCompletionModel::new();
        model.expect_complete().times(0);

        let err = service(page, model).generate_question("foo").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCategory(_)));
    }

    #[actix_web::test]
    async fn empty_page_skips_generation() {
        let mut model = MockCompletionModel::new();
        model.expect_complete().times(0);

        let err = service(page_returning("<body>   </body>"), model)
            .generate_question("audits")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NoContent(_)));
    }

    #[actix_web::test]
    async fn upstream_failure_skips_generation() {
        let mut page = MockPageSource::new();
        page.expect_fetch_page()
            .returning(|_| Err(AppError::UpstreamFetch { status: 500 }));
        let mut model = MockCompletionModel::new();
        model.expect_complete().times(0);

        let err = service(page, model)
            .generate_question("audits")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamFetch { status: 500 }));
    }

    #[actix_web::test]
    async fn same_inputs_give_same_record() {
        let first = service(page_returning(PAGE), model_returning(GENERATED))
            .generate_question("budget")
            .await
            .unwrap();
        let second = service(page_returning(PAGE), model_returning(GENERATED))
            .generate_question("Budget")
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn check_answer_reports_correct_label() {
        let record = QuestionRecord {
            question: "Q?".to_string(),
            options: QuestionOptions {
                a: "1".to_string(),
                b: "2".to_string(),
                c: "3".to_string(),
                d: "4".to_string(),
            },
            correct_answer: "B. 2".to_string(),
        };

        assert_eq!(
            QuestionService::check_answer(&record, OptionLabel::B),
            (true, Some(OptionLabel::B))
        );
        assert_eq!(
            QuestionService::check_answer(&record, OptionLabel::D),
            (false, Some(OptionLabel::B))
        );
    }

    #[test]
    fn pipeline_stage_names() {
        assert_eq!(PipelineStage::Idle.to_string(), "idle");
        assert_eq!(PipelineStage::Parsing.to_string(), "parsing");
    }
}
