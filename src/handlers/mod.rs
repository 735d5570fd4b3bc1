pub mod assignment_handler;
pub mod chat_handler;
pub mod quiz_handler;
pub mod video_handler;

pub use assignment_handler::solve_assignment;
pub use chat_handler::chat;
pub use quiz_handler::generate_quiz;
pub use video_handler::generate_video_script;

use actix_web::{get, HttpResponse};

use crate::errors::AppError;

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Rejects missing or whitespace-only required fields before any prompt is
/// built or any network call is made.
pub(crate) fn require_field<'a>(
    value: Option<&'a str>,
    message: &str,
) -> Result<&'a str, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::Validation(message.to_string())),
    }
}
