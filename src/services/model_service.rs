use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::errors::{AppError, AppResult};

// Generation parameters are fixed; callers cannot tune them per request.
const TEMPERATURE: f64 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Fallback surfaced when the endpoint fails without a usable error message.
const GENERIC_FAILURE: &str = "Gemini API failed";

/// Model tiers available on the completion endpoint. All current handlers use
/// `Pro`; `Vision` is reserved for image-aware prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeminiModel {
    Pro,
    Vision,
}

impl GeminiModel {
    pub fn as_str(self) -> &'static str {
        match self {
            GeminiModel::Pro => "gemini-pro",
            GeminiModel::Vision => "gemini-pro-vision",
        }
    }
}

/// Single-shot text generation. One invocation performs exactly one outbound
/// call; no retry, no streaming.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: GeminiModel, prompt: &str) -> AppResult<String>;
}

/// Client for the Gemini `generateContent` endpoint. Endpoint URL and API key
/// are injected at construction so tests can point it at a stub server.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: GeminiModel, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url,
            model.as_str(),
            self.api_key.expose_secret()
        );

        let response = self
            .http
            .post(&url)
            .json(&build_request_body(prompt))
            .send()
            .await
            .map_err(|err| {
                AppError::ModelRequest(format!("request to model endpoint failed: {err}"))
            })?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(AppError::ModelRequest(message));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| AppError::ModelRequest(GENERIC_FAILURE.to_string()))?;

        extract_candidate_text(completion)
            .ok_or_else(|| AppError::ModelRequest(GENERIC_FAILURE.to_string()))
    }
}

fn build_request_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [
            {
                "parts": [{ "text": prompt }],
            },
        ],
        "generationConfig": {
            "temperature": TEMPERATURE,
            "topK": TOP_K,
            "topP": TOP_P,
            "maxOutputTokens": MAX_OUTPUT_TOKENS,
        },
    })
}

fn extract_candidate_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}
