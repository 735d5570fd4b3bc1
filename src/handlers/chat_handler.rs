use std::sync::Arc;

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts,
    errors::AppError,
    models::dto::{request::ChatRequest, response::ChatResponse},
    services::model_service::GeminiModel,
};

// Substring heuristic over the model's own phrasing. Fragile, but the prompt
// instructs the model to praise correct answers, so these two cover it.
const AFFIRMATIONS: [&str; 2] = ["correct", "well done"];

fn contains_affirmation(completion: &str) -> bool {
    let lowered = completion.to_lowercase();
    AFFIRMATIONS.iter().any(|phrase| lowered.contains(phrase))
}

#[post("/api/gemini/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (message, user_id) = match (request.message.as_deref(), request.user_id.as_deref()) {
        (Some(message), Some(user_id))
            if !message.trim().is_empty() && !user_id.trim().is_empty() =>
        {
            (message, user_id)
        }
        _ => {
            return Err(AppError::Validation(
                "Message and userId are required".to_string(),
            ))
        }
    };

    let prompt = prompts::chat_prompt(message, request.pdf_text.as_deref());
    let completion = state.generator.generate(GeminiModel::Pro, &prompt).await?;

    // Award a point when the reply acknowledges a correct answer. The
    // increment is detached: its outcome never affects this response.
    if contains_affirmation(&completion) {
        let points = Arc::clone(&state.points);
        let user_id = user_id.to_string();
        tokio::spawn(async move {
            if let Err(err) = points.increment(&user_id, 1).await {
                log::warn!("point increment failed for user {user_id}: {err}");
            }
        });
    }

    Ok(HttpResponse::Ok().json(ChatResponse {
        success: true,
        message: completion,
    }))
}
