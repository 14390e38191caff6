use gemini_client::SummaryError;
use thiserror::Error;
use translate_client::TranslationError;

use crate::phrases::Phrase;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),
}

impl PipelineError {
    /// Plain-text message shown to the user when a run fails. Never includes credentials:
    /// adapters strip request URLs and mask keys before building their errors.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Summary(SummaryError::MalformedResponse(_)) => {
                Phrase::SummaryUnreadable.text("en").to_string()
            }
            PipelineError::Summary(SummaryError::Transport(detail)) => format!("Error: {}", detail),
            PipelineError::Translation(e) => format!("Error: translation failed: {}", e),
        }
    }
}
