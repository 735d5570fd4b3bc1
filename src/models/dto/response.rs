use serde::Serialize;

use crate::models::domain::QuizItem;

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub success: bool,
    pub solution: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub data: Vec<QuizItem>,
}

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub success: bool,
    pub data: String,
}
