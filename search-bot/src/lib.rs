//! # search_bot
//!
//! Telegram front end for the query pipeline: parses `/start`, `/help` and `/search`, runs the
//! pipeline and delivers its chunks in order. Public API: [`BotConfig`], [`build_components`],
//! [`run_bot`], and the handlers for tests and custom chains.

mod assembly;
pub mod command;
mod config;
pub mod handlers;
mod runner;

pub use assembly::{build_components, build_handler_chain, build_pipeline, BotComponents};
pub use command::{parse_command, Command};
pub use config::{BotConfig, ProviderConfig};
pub use handlers::{deliver_chunks, LoggingHandler, SearchCommandHandler};
pub use runner::run_bot;
