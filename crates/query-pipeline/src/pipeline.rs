//! [`QueryPipeline`]: one user query in, ordered outbound chunks out.

use std::sync::Arc;

use futures::{stream, StreamExt, TryStreamExt};
use gemini_client::Summarizer;
use tracing::{error, info, instrument};
use translate_client::{TranslationError, Translator, AUTO};

use crate::bullets::{format_bullets, Bullet};
use crate::chunk::{split_chunks, MessageChunk};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::phrases::Phrase;

/// Orchestrates translation, summarization, formatting and chunking for a single query.
///
/// Holds no per-request state: one instance is built at startup and shared (via `Arc`) by every
/// concurrent request.
#[derive(Clone)]
pub struct QueryPipeline {
    translator: Arc<dyn Translator>,
    summarizer: Arc<dyn Summarizer>,
    config: PipelineConfig,
}

impl QueryPipeline {
    pub fn new(
        translator: Arc<dyn Translator>,
        summarizer: Arc<dyn Summarizer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            translator,
            summarizer,
            config,
        }
    }

    /// Runs the pipeline. A blank query yields the usage message without any remote call;
    /// otherwise the first failing step aborts the whole run.
    #[instrument(skip(self, raw_query), fields(query_len = raw_query.len()))]
    pub async fn run(&self, raw_query: &str) -> Result<Vec<MessageChunk>, PipelineError> {
        let query = raw_query.trim();
        if query.is_empty() {
            info!("step: empty query, replying with usage");
            return Ok(vec![MessageChunk::markdown(
                Phrase::SearchUsage.text(&self.config.output_locale),
            )]);
        }

        let translated_query = self
            .translator
            .translate(query, &self.config.working_locale, AUTO)
            .await?;
        info!(
            locale = %self.config.working_locale,
            translated_query = %translated_query,
            "step: query translated"
        );

        let raw_summary = self
            .summarizer
            .summarize(&translated_query, self.config.bullet_count)
            .await?;

        let bullets = format_bullets(&raw_summary);
        info!(
            summary_lines = raw_summary.lines().count(),
            bullets = bullets.len(),
            "step: summary formatted"
        );

        let translated = self.translate_bullets(&bullets).await?;
        let response = translated.join("\n");

        let chunks = split_chunks(&response, self.config.max_chunk_size);
        if chunks.is_empty() {
            info!("step: no bullets left after formatting");
            return Ok(vec![MessageChunk::plain(
                Phrase::NoResults.text(&self.config.output_locale),
            )]);
        }
        info!(
            response_chars = response.chars().count(),
            chunks = chunks.len(),
            "step: response chunked"
        );
        Ok(chunks)
    }

    /// Like [`run`](Self::run), but a failed run becomes a single plain error message, so the
    /// caller always has something to deliver and never delivers partial output.
    pub async fn answer(&self, raw_query: &str) -> Vec<MessageChunk> {
        match self.run(raw_query).await {
            Ok(chunks) => chunks,
            Err(e) => {
                error!(error = %e, "Query pipeline failed");
                vec![MessageChunk::plain(e.user_message())]
            }
        }
    }

    /// Greeting for `/start`, passed through the translator into the working locale.
    pub async fn greeting(&self) -> Result<String, TranslationError> {
        let working_locale = &self.config.working_locale;
        self.translator
            .translate(Phrase::Greeting.text(working_locale), working_locale, AUTO)
            .await
    }

    /// Help text for `/help`.
    pub fn help(&self) -> &'static str {
        Phrase::Help.text(&self.config.output_locale)
    }

    /// Translates every bullet into the output locale. Up to `translate_concurrency` requests
    /// run at once; results keep bullet order and the first failure aborts the rest.
    async fn translate_bullets(&self, bullets: &[Bullet]) -> Result<Vec<String>, TranslationError> {
        let output_locale = self.config.output_locale.as_str();
        let requests: Vec<_> = bullets
            .iter()
            .map(|bullet| {
                self.translator
                    .translate(bullet.as_str(), output_locale, AUTO)
            })
            .collect();
        stream::iter(requests)
        .buffered(self.config.translate_concurrency.max(1))
        .try_collect()
        .await
    }
}
