//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use query_pipeline::PipelineConfig;
use search_bot::{BotConfig, ProviderConfig};

#[derive(Parser, Debug)]
#[command(name = "dbot")]
#[command(about = "Telegram summarize-and-translate bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run one query through the pipeline and print the chunks the bot would send.
    Ask {
        /// Free-text topic, e.g. `Subject: Biology | Chapter: Cell Biology`.
        query: Vec<String>,
        /// Exit with an error instead of printing the user-facing error message.
        #[arg(long)]
        strict: bool,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Provider and pipeline config for `ask`; no Telegram token needed.
pub fn load_pipeline_config() -> Result<(ProviderConfig, PipelineConfig)> {
    let providers = ProviderConfig::from_env()?;
    providers.validate()?;
    let pipeline = PipelineConfig::from_env();
    pipeline.validate()?;
    Ok((providers, pipeline))
}
