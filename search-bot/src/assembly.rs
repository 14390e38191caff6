//! Assembly: builds the HTTP client, adapters, pipeline and handler chain from [`BotConfig`].
//! Everything is built once at startup and shared via `Arc`.

use anyhow::{Context, Result};
use dbot_core::Bot;
use dbot_telegram::TelegramBotAdapter;
use gemini_client::{GeminiClient, Summarizer};
use handler_chain::HandlerChain;
use query_pipeline::{PipelineConfig, QueryPipeline};
use std::sync::Arc;
use tracing::info;
use translate_client::{GoogleTranslator, Translator};

use crate::config::{BotConfig, ProviderConfig};
use crate::handlers::{LoggingHandler, SearchCommandHandler};

/// Shared pieces the runner needs: the teloxide bot, its username slot and the pipeline.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Filled by the runner from get_me() before polling starts.
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    pub pipeline: Arc<QueryPipeline>,
}

fn build_http_client(config: &ProviderConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.http_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build HTTP client")
}

/// Builds the query pipeline with the Google translator and the Gemini summarizer.
pub fn build_pipeline(
    config: &ProviderConfig,
    pipeline_config: &PipelineConfig,
) -> Result<Arc<QueryPipeline>> {
    let http = build_http_client(config)?;

    let translator: Arc<dyn Translator> = Arc::new(
        GoogleTranslator::new()
            .with_base_url(config.translate_api_base.clone())
            .with_http_client(http.clone()),
    );
    let gemini = GeminiClient::new(config.gemini_api_key.clone())
        .with_base_url(config.gemini_api_base.clone())
        .with_model(config.gemini_model.clone())
        .with_http_client(http);
    info!(gemini = ?gemini, timeout = ?config.http_timeout(), "step: adapters built");
    let summarizer: Arc<dyn Summarizer> = Arc::new(gemini);

    Ok(Arc::new(QueryPipeline::new(
        translator,
        summarizer,
        pipeline_config.clone(),
    )))
}

/// Logging first, then the command handler.
pub fn build_handler_chain(
    pipeline: Arc<QueryPipeline>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(SearchCommandHandler::new(
            pipeline,
            bot,
            bot_username,
        )))
}

pub fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.telegram.build_bot()?;
    let pipeline = build_pipeline(&config.providers, &config.pipeline)?;
    Ok(BotComponents {
        teloxide_bot,
        bot_username: Arc::new(tokio::sync::RwLock::new(None)),
        pipeline,
    })
}

impl BotComponents {
    /// Handler chain that delivers through this bot.
    pub fn handler_chain(&self) -> HandlerChain {
        let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(self.teloxide_bot.clone()));
        build_handler_chain(self.pipeline.clone(), bot, self.bot_username.clone())
    }
}
