pub mod completion_model;
pub mod content_fetcher;
pub mod generation_parser;
pub mod page_source;
pub mod question_service;
pub mod question_synthesizer;
