//! Google Translate via the public `translate_a/single` (client=gtx) endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{TranslationError, Translator, AUTO, MAX_TEXT_CHARS};

pub const DEFAULT_TRANSLATE_API_BASE: &str = "https://translate.googleapis.com";

/// Longest error body kept in [`TranslationError::Status`].
const ERROR_BODY_PREVIEW_LEN: usize = 200;

#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_TRANSLATE_API_BASE.to_string(),
        }
    }

    /// Points the translator at another host (e.g. a mock server in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Uses a pre-configured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_a/single", self.base_url.trim_end_matches('/'))
    }
}

/// Extracts the translated text from a gtx payload: `[[["<translated>", "<original>", ...], ...], ...]`.
/// Long inputs come back as several segments, which are concatenated in order.
pub(crate) fn parse_translation(body: &str) -> Result<String, TranslationError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TranslationError::Malformed(format!("invalid JSON: {}", e)))?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Malformed("missing translation segments".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }
    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: &str,
    ) -> Result<String, TranslationError> {
        // Short-circuits hand back the caller's text untouched; only the request uses the trimmed form.
        let query = text.trim();
        if query.is_empty() || (source != AUTO && source == target) {
            return Ok(text.to_string());
        }
        let len = query.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(TranslationError::TooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        debug!(source = %source, target = %target, "step: translate request");
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::Request(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_PREVIEW_LEN)
                .collect();
            return Err(TranslationError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::Request(e.without_url().to_string()))?;
        let translated = parse_translation(&body)?;
        info!(
            source = %source,
            target = %target,
            translated_len = translated.len(),
            "step: translate done"
        );
        Ok(translated)
    }
}
