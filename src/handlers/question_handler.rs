use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::Category,
        dto::{
            request::CheckAnswerRequest,
            response::{CategoryDto, CheckAnswerResponse},
        },
    },
    services::question_service::QuestionService,
};

#[get("/generate-question/{category}")]
pub async fn generate_question(
    req: HttpRequest,
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "[{}] Generating question for category '{}'",
        get_request_id(&req).unwrap_or_default(),
        category
    );
    let record = state.question_service.generate_question(&category).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[get("/categories")]
pub async fn list_categories() -> HttpResponse {
    let categories: Vec<CategoryDto> =
        Category::ALL.into_iter().map(CategoryDto::from).collect();
    HttpResponse::Ok().json(categories)
}

#[post("/check-answer")]
pub async fn check_answer(
    request: web::Json<CheckAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let selected = request.selected_label()?;

    let (correct, correct_label) = QuestionService::check_answer(&request.record, selected);
    Ok(HttpResponse::Ok().json(CheckAnswerResponse {
        correct,
        correct_label,
    }))
}
