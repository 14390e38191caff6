//! # Translation client
//!
//! Defines the [`Translator`] trait used by the query pipeline and a Google Translate
//! implementation ([`GoogleTranslator`]). Implementations are stateless and safe to share
//! behind `Arc<dyn Translator>`.

use async_trait::async_trait;
use thiserror::Error;

mod google;

pub use google::{GoogleTranslator, DEFAULT_TRANSLATE_API_BASE};

/// Source locale value that lets the provider detect the input language.
pub const AUTO: &str = "auto";

/// Longest input (in characters) accepted by a single translate call.
pub const MAX_TEXT_CHARS: usize = 5000;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    Request(String),

    #[error("Translation API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed translation response: {0}")]
    Malformed(String),

    #[error("Text too long to translate: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },
}

/// Translates text between locales (ISO-639 codes such as `en`, `hi`).
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` from `source` (a locale code or [`AUTO`]) into `target`.
    ///
    /// Blank input never fails and is returned without contacting the provider.
    async fn translate(
        &self,
        text: &str,
        target: &str,
        source: &str,
    ) -> Result<String, TranslationError>;
}
