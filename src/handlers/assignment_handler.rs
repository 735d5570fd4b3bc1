use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts,
    errors::AppError,
    handlers::require_field,
    models::dto::{request::AssignmentRequest, response::AssignmentResponse},
    services::model_service::GeminiModel,
};

#[post("/api/gemini/assignment")]
pub async fn solve_assignment(
    state: web::Data<AppState>,
    request: web::Json<AssignmentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let assignment_text = require_field(request.pdf_text.as_deref(), "pdfText is required")?;

    let prompt = prompts::assignment_prompt(assignment_text);
    let solution = state.generator.generate(GeminiModel::Pro, &prompt).await?;

    Ok(HttpResponse::Ok().json(AssignmentResponse {
        success: true,
        solution,
    }))
}
