//! Command-line interface for the text cleaner pipelines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

use cleaner_core::CleanerConfig;

mod commands;
mod logging;

use logging::LogFormat;

/// Text cleaner CLI
#[derive(Debug, Parser)]
#[command(name = "tts-clean")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides the config file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (overrides the config file)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Text => LogFormat::Text,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Clean text with one pipeline
    Normalize {
        /// Input text or file path (use @file.txt for file input)
        input: String,

        /// Cleaner key or config name (e.g. english, armenian_cleaners)
        #[arg(long, conflicts_with = "lang")]
        cleaner: Option<String>,

        /// Language tag; picks that language's cleaner (e.g. hy, en, zh)
        #[arg(long)]
        lang: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the stage order of one or all pipelines
    Stages {
        /// Cleaner key or config name
        #[arg(long)]
        cleaner: Option<String>,
    },

    /// Show version and crate info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CleanerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CleanerConfig::default(),
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let format = match cli.log_format {
        Some(arg) => LogFormat::from(arg),
        None => config
            .logging
            .format
            .parse::<LogFormat>()
            .context("invalid logging.format in config")?,
    };
    logging::init_logging(level, format);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting tts-clean");
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Normalize {
            input,
            cleaner,
            lang,
            json,
        } => {
            let cleaner = match lang.as_deref() {
                Some(tag) => commands::cleaner_for_lang(tag)?,
                None => commands::resolve_cleaner(cleaner.as_deref(), &config)?,
            };
            commands::normalize::run(&input, cleaner, json).context("normalization failed")?;
        }
        Commands::Stages { cleaner } => {
            let cleaner = match cleaner.as_deref() {
                Some(key) => Some(commands::resolve_cleaner(Some(key), &config)?),
                None => None,
            };
            commands::stages::run(cleaner)?;
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
