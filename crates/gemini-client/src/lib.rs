//! # Gemini client
//!
//! Defines the [`Summarizer`] trait used by the query pipeline and a Gemini `generateContent`
//! implementation ([`GeminiClient`]). Provides token masking for safe logging.

use async_trait::async_trait;
use thiserror::Error;

mod gemini;

pub use gemini::{build_prompt, GeminiClient, DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};

/// Summarization failure. Transport and payload problems are kept apart for diagnostics.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Network failure, timeout, or non-2xx status.
    #[error("{0}")]
    Transport(String),

    /// The response body is not JSON or lacks `candidates[0].content.parts[0].text`.
    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),
}

impl SummaryError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SummaryError::Transport(_))
    }
}

/// Produces a bulleted summary of a text with a generative model.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Asks for `bullet_count` bullet points summarizing `text` and returns the raw model text.
    async fn summarize(&self, text: &str, bullet_count: usize) -> Result<String, SummaryError>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}
