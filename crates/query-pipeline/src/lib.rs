//! # query-pipeline
//!
//! Turns one user query into the ordered messages sent back to the chat:
//! translate to the working locale → summarize with the model → [`format_bullets`] →
//! translate each bullet to the output locale → join → [`split_chunks`].
//!
//! The pipeline depends only on the [`Translator`] and [`Summarizer`] traits; concrete
//! clients are injected by the caller.

pub mod bullets;
pub mod chunk;
pub mod config;
pub mod error;
pub mod phrases;
pub mod pipeline;

pub use bullets::{format_bullets, Bullet, BULLET_GLYPH, MARKUP_MARKER};
pub use chunk::{split_chunks, MessageChunk, TextFormat, TELEGRAM_MAX_MESSAGE_CHARS};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use gemini_client::{SummaryError, Summarizer};
pub use phrases::Phrase;
pub use pipeline::QueryPipeline;
pub use translate_client::{TranslationError, Translator, AUTO};
