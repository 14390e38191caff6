//! # dbot-cli
//!
//! Argument parsing and config loading for the `dbot` binary.

pub mod cli;

pub use cli::{load_config, load_pipeline_config, Cli, Commands};
