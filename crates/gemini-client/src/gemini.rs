//! Gemini `generateContent` client (REST, API key in the query string).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{mask_token, SummaryError, Summarizer};

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

const ERROR_BODY_PREVIEW_LEN: usize = 300;

/// Builds the instruction sent to the model.
pub fn build_prompt(text: &str, bullet_count: usize) -> String {
    format!("Summarize the topic in {} bullet points: {}", bullet_count, text)
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    /// Sent as the `key` query parameter; only ever logged masked.
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &mask_token(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_GEMINI_API_BASE.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Uses a pre-configured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
pub(crate) fn extract_text(body: &str) -> Result<String, SummaryError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| SummaryError::MalformedResponse(format!("invalid JSON: {}", e)))?;
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| SummaryError::MalformedResponse("no candidates".to_string()))?;
    let content = candidate
        .content
        .ok_or_else(|| SummaryError::MalformedResponse("candidate has no content".to_string()))?;
    let part = content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| SummaryError::MalformedResponse("content has no parts".to_string()))?;
    part.text
        .ok_or_else(|| SummaryError::MalformedResponse("part has no text".to_string()))
}

/// Error text for a reqwest failure with the request URL (and thus the API key) removed.
fn describe_transport_error(e: reqwest::Error) -> String {
    let e = e.without_url();
    let mut message = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl Summarizer for GeminiClient {
    #[instrument(skip(self, text), fields(model = %self.model, text_len = text.len()))]
    async fn summarize(&self, text: &str, bullet_count: usize) -> Result<String, SummaryError> {
        let prompt = build_prompt(text, bullet_count);
        info!(
            api_key = %mask_token(&self.api_key),
            bullet_count = bullet_count,
            "step: Gemini generateContent request"
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| SummaryError::Transport(describe_transport_error(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_PREVIEW_LEN)
                .collect();
            return Err(SummaryError::Transport(format!(
                "Gemini API error ({}): {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(|e| SummaryError::Transport(describe_transport_error(e)))?;
        let summary = extract_text(&body)?;
        info!(summary_len = summary.len(), "step: Gemini generateContent done");
        Ok(summary)
    }
}
