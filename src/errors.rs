use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::services::response_parser::{QuizParseError, VideoParseError};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ModelRequest(String),

    #[error("Quiz generation failed: {0}")]
    QuizParse(String),

    #[error("Video generation failed: {0}")]
    VideoParse(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ModelRequest(_)
            | AppError::QuizParse(_)
            | AppError::VideoParse(_)
            | AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<QuizParseError> for AppError {
    fn from(err: QuizParseError) -> Self {
        AppError::QuizParse(err.to_string())
    }
}

impl From<VideoParseError> for AppError {
    fn from(err: VideoParseError) -> Self {
        AppError::VideoParse(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Validation("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ModelRequest("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::QuizParse("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::VideoParse("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::Validation("pdfText is required".into());
        assert_eq!(err.to_string(), "pdfText is required");

        let err = AppError::QuizParse("no JSON array found in completion".into());
        assert_eq!(
            err.to_string(),
            "Quiz generation failed: no JSON array found in completion"
        );
    }
}
