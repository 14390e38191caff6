//! Bot config: Telegram connectivity, provider endpoints and pipeline settings.
//! Provider vars: GEMINI_API_KEY (required), GEMINI_API_BASE, GEMINI_MODEL, TRANSLATE_API_BASE,
//! HTTP_TIMEOUT_SECS. Logging: LOG_FILE. See [`TelegramConfig`] and [`PipelineConfig`] for the rest.

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use gemini_client::{mask_token, DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};
use query_pipeline::PipelineConfig;
use std::env;
use std::time::Duration;
use translate_client::DEFAULT_TRANSLATE_API_BASE;

pub const DEFAULT_LOG_FILE: &str = "logs/search-bot.log";

/// Gemini and translation endpoints. Needed by every pipeline run, with or without Telegram.
#[derive(Clone)]
pub struct ProviderConfig {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub translate_api_base: String,
    /// Per-request timeout for Gemini and translation calls; None means no timeout.
    pub http_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("gemini_api_key", &mask_token(&self.gemini_api_key))
            .field("gemini_api_base", &self.gemini_api_base)
            .field("gemini_model", &self.gemini_model)
            .field("translate_api_base", &self.translate_api_base)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    /// Builds config with the given key and default endpoints.
    pub fn with_api_key(gemini_api_key: String) -> Self {
        Self {
            gemini_api_key,
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            translate_api_base: DEFAULT_TRANSLATE_API_BASE.to_string(),
            http_timeout_secs: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .context("GEMINI_API_KEY not set")?;
        let gemini_api_base = env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let translate_api_base = env::var("TRANSLATE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_BASE.to_string());
        let http_timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(s) => Some(
                s.trim()
                    .parse::<u64>()
                    .with_context(|| format!("HTTP_TIMEOUT_SECS is not a number: {}", s))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            gemini_api_key,
            gemini_api_base,
            gemini_model,
            translate_api_base,
            http_timeout_secs,
        })
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("GEMINI_API_BASE", &self.gemini_api_base),
            ("TRANSLATE_API_BASE", &self.translate_api_base),
        ] {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("{} is not a valid URL: {}", name, url);
            }
        }
        if self.http_timeout_secs == Some(0) {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}

/// Everything `run_bot` needs.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub providers: ProviderConfig,
    pub pipeline: PipelineConfig,
    /// Tracing output is appended here as well as to stdout.
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN / TELEGRAM_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env(token)?,
            providers: ProviderConfig::from_env()?,
            pipeline: PipelineConfig::from_env(),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.providers.validate()?;
        self.pipeline.validate()
    }
}
