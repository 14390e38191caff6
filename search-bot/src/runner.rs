//! Entry point: validate config, start logging, assemble components and poll Telegram.

use anyhow::Result;
use dbot_core::init_tracing;
use dbot_telegram::run_repl;
use tracing::info;

use crate::assembly::build_components;
use crate::config::BotConfig;

/// Runs the bot until the process is stopped.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;
    info!(config = ?config, "Starting search bot");

    let components = build_components(&config)?;
    let handler_chain = components.handler_chain();
    info!(handlers = handler_chain.len(), "step: handler chain ready");

    run_repl(components.teloxide_bot, handler_chain, components.bot_username).await
}
