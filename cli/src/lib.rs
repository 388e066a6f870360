use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finpre_common::FinpreConfig;
use finpre_core::{GeminiBackend, GenerationClient};

#[derive(Debug, Parser)]
#[clap(
    name = "finpre",
    about = "Generate and review 45-minute financial presentation decks"
)]
pub struct Cli {
    /// Enable debug logging
    #[clap(long)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a deck headlessly and emit it as JSON
    Generate {
        /// Topic to generate for; falls back to the configured default
        #[clap(long)]
        topic: Option<String>,

        /// Write the deck JSON to this file instead of stdout
        #[clap(long)]
        out: Option<PathBuf>,
    },
    /// Store the API key in the config file
    Login {
        #[clap(long = "api-key")]
        api_key: String,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = FinpreConfig::load().await?;

    match cli.command {
        Some(Command::Generate { topic, out }) => {
            init_logging(cli.debug, false)?;
            run_generate(&config, topic, out).await
        }
        Some(Command::Login { api_key }) => run_login(config, api_key).await,
        None => {
            init_logging(cli.debug, true)?;
            finpre_tui::run_main(config).await
        }
    }
}

async fn run_generate(
    config: &FinpreConfig,
    topic: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let topic = topic.unwrap_or_else(|| config.starting_topic());
    let client = GeminiBackend::from_config(config)?;
    let deck = client.generate(&topic).await?;
    let json = serde_json::to_string_pretty(&deck)?;
    match out {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Saved deck to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

async fn run_login(mut config: FinpreConfig, api_key: String) -> Result<()> {
    config.api_key = Some(api_key);
    config.save().await?;
    println!("API key saved to {}", FinpreConfig::config_path()?.display());
    Ok(())
}

fn init_logging(debug: bool, to_file: bool) -> Result<()> {
    let default_directive = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    if to_file {
        // The TUI owns the terminal, so log lines go to a file.
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(FinpreConfig::log_path()?)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
