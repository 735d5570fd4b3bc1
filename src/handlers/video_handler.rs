use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts,
    errors::AppError,
    handlers::require_field,
    models::dto::{request::VideoRequest, response::VideoResponse},
    services::{model_service::GeminiModel, response_parser::parse_video_script},
};

#[post("/api/gemini/video")]
pub async fn generate_video_script(
    state: web::Data<AppState>,
    request: web::Json<VideoRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let topic = require_field(request.topic.as_deref(), "Topic is required")?;

    let prompt = prompts::video_prompt(topic);
    let completion = state.generator.generate(GeminiModel::Pro, &prompt).await?;

    // Re-render through the parsed script so the caller always sees the
    // canonical section layout, whatever the model wrapped around it.
    let script = parse_video_script(&completion)?;

    Ok(HttpResponse::Ok().json(VideoResponse {
        success: true,
        data: script.to_string(),
    }))
}
