use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts,
    errors::AppError,
    handlers::require_field,
    models::dto::{request::QuizRequest, response::QuizResponse},
    services::{model_service::GeminiModel, response_parser::parse_quiz},
};

#[post("/api/gemini/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let pdf_text = require_field(request.pdf_text.as_deref(), "pdfText is required")?;

    let prompt = prompts::quiz_prompt(pdf_text);
    let completion = state.generator.generate(GeminiModel::Pro, &prompt).await?;
    let data = parse_quiz(&completion)?;

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        data,
    }))
}
