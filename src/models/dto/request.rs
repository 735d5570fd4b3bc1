use serde::Deserialize;
use validator::Validate;

// Required fields are modelled as options so that absence reaches the
// handlers' own validation instead of failing JSON extraction; the handlers
// turn a missing or blank field into a 400 with the documented message.

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    #[validate(length(max = 100000))]
    pub pdf_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[validate(length(max = 10000))]
    pub message: Option<String>,

    #[validate(length(max = 100000))]
    pub pdf_text: Option<String>,

    #[validate(length(max = 100))]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[validate(length(max = 100000))]
    pub pdf_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    #[validate(length(max = 500))]
    pub topic: Option<String>,
}
