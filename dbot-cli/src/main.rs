//! dbot CLI: run the Telegram bot, or answer one query from the terminal. Config from env
//! (and `.env`) with optional CLI args.

use anyhow::Result;
use clap::Parser;
use dbot_cli::{load_config, load_pipeline_config, Cli, Commands};
use search_bot::{build_pipeline, run_bot};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Ask { query, strict } => handle_ask(&query.join(" "), strict).await,
    }
}

/// Handle the ask command: one pipeline run, chunks printed in delivery order.
/// Logs go to stderr so stdout holds only the answer.
async fn handle_ask(query: &str, strict: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (providers, pipeline_config) = load_pipeline_config()?;
    let pipeline = build_pipeline(&providers, &pipeline_config)?;

    let chunks = if strict {
        pipeline.run(query).await?
    } else {
        pipeline.answer(query).await
    };

    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        if total > 1 {
            println!("--- message {}/{} ---", i + 1, total);
        }
        println!("{}", chunk);
    }
    Ok(())
}
