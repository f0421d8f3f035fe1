//! Overlay Weather CLI
//!
//! Terminal front end for the setup surface and the weather widget.

#![allow(clippy::print_stdout)]

mod repl;
mod terminal_view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::messages;
use application::services::{
    ConfigCodec, SetupController, WeatherService, WidgetController,
};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, CommandClipboard, FileKeyValueStore, WeatherAdapter, init_telemetry};
use tracing::{debug, info};

use crate::repl::Repl;
use crate::terminal_view::{TerminalSetupView, TerminalWidgetView};

/// Overlay Weather CLI
#[derive(Parser)]
#[command(name = "overlay-weather")]
#[command(author, version, about = "Weather widget for streaming overlays", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml when present)
    #[arg(short, long, env = "OVERLAY_WEATHER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive setup: search places, edit the list, build the widget URL
    Setup,

    /// Search places by name
    ///
    /// Example: overlay-weather search Taipei --language zh
    Search {
        /// Place name to look up
        query: String,

        /// Number of results (default: from config)
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Result language (default: from config)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Print the widget URL for the saved setup
    Url,

    /// Run the widget for a widget URL
    ///
    /// Example: overlay-weather widget 'http://localhost:8080/widget?locations=...'
    Widget {
        /// Widget URL or bare query string
        url: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    // Set up logging based on verbosity; config and RUST_LOG take precedence
    init_telemetry(&config.telemetry, log_filter_from_verbosity(cli.verbose))?;
    debug!(?config, "Configuration loaded");

    let weather = WeatherService::new(Arc::new(WeatherAdapter::with_config(
        config.weather.clone(),
    )?));

    match cli.command {
        Commands::Setup => run_setup(&config, weather).await?,

        Commands::Search {
            query,
            count,
            language,
        } => {
            let count = count.unwrap_or(config.widget.search_count);
            let language = language.unwrap_or_else(|| config.widget.search_language.clone());

            match weather.search_location(&query, count, &language).await {
                Ok(results) if results.is_empty() => println!("{}", messages::NO_MATCHING_LOCATIONS),
                Ok(results) => {
                    for (i, result) in results.iter().enumerate() {
                        println!("[{}] {}", i + 1, result.label());
                    }
                },
                Err(e) => {
                    println!("❌ {}", messages::SEARCH_FAILED);
                    println!("   {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Url => {
            let codec = codec_for(&config)?;
            let saved = codec.load_persisted().await.unwrap_or_default();

            match ConfigCodec::widget_url(&config.widget.base_url, &saved) {
                Some(url) => println!("{url}"),
                None => {
                    println!("{}", messages::ADD_LOCATION_FIRST);
                    std::process::exit(1);
                },
            }
        },

        Commands::Widget { url } => {
            let mut widget =
                WidgetController::new(weather, TerminalWidgetView::new(std::io::stdout()));

            if !widget.init(&url).await {
                std::process::exit(1);
            }

            tokio::select! {
                () = widget.run_cycle() => {
                    tokio::signal::ctrl_c().await?;
                },
                res = tokio::signal::ctrl_c() => res?,
            }
            info!("Widget stopped");
        },
    }

    Ok(())
}

/// Persistence for the setup state, rooted at the configured data dir
fn codec_for(config: &AppConfig) -> anyhow::Result<ConfigCodec> {
    let data_dir = config.storage.resolve_data_dir()?;
    debug!(dir = %data_dir.display(), "Using data directory");
    let store = Arc::new(FileKeyValueStore::new(data_dir));
    Ok(ConfigCodec::with_key(store, config.storage.key.clone()))
}

async fn run_setup(config: &AppConfig, weather: WeatherService) -> anyhow::Result<()> {
    let clipboard = Arc::new(CommandClipboard::from_argv(&config.clipboard.command)?);
    let controller = SetupController::new(
        weather,
        codec_for(config)?,
        clipboard,
        config.widget.setup_options(),
        TerminalSetupView::new(std::io::stdout()),
    );

    let mut repl = Repl::new(controller, config.widget.debounce());
    repl.run(tokio::io::BufReader::new(tokio::io::stdin()))
        .await
        .context("Failed to read input")?;
    Ok(())
}
