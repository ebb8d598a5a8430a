pub mod health_handler;
pub mod question_handler;

pub use health_handler::health_check;
pub use question_handler::{check_answer, generate_question, list_categories};

use actix_web::web;

use crate::errors::AppError;

/// Rejects unreadable JSON bodies with the service's error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(list_categories)
        .service(generate_question)
        .service(check_answer);
}
