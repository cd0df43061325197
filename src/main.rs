//! YTViz CLI
//!
//! Terminal front end for the analytics dashboard:
//! - Interactive dashboard shell
//! - One-shot rendering of a dataset
//! - Endpoint listing
//! - Default config generation

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ytviz::client::AnalyticsClient;
use ytviz::config::{generate_default_config, Config, LoggingConfig};
use ytviz::dataset::{DatasetKey, EndpointRegistry};
use ytviz::dispatcher::Dispatcher;
use ytviz::render::render;
use ytviz::render::text::render_text;
use ytviz::shell::Shell;

#[derive(Parser)]
#[command(name = "ytviz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard for precomputed transcript analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Analytics service URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for one-shot commands (text, json)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive dashboard (default)
    Shell,

    /// Fetch one dataset and print its view
    Show {
        /// Dataset name (e.g. wordFrequency or word-frequency)
        dataset: String,
    },

    /// List registered endpoints
    Endpoints,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(format) = &cli.format {
        config.dashboard.format = format.clone();
    }
    if cli.no_color {
        config.dashboard.color = false;
    }

    init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let dispatcher = build_dispatcher(&config)?;
            tracing::info!("Starting dashboard against {}", config.api.base_url);
            Shell::new(&config.dashboard).run(&dispatcher).await?;
        }

        Commands::Show { dataset } => {
            let dispatcher = build_dispatcher(&config)?;
            let commit = dispatcher.select_named(&dataset)?.await?;
            tracing::debug!(?commit, "Dataset request settled");

            let state = dispatcher.snapshot();
            let view = render(&state);

            match config.dashboard.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&view)?),
                _ => print!("{}", render_text(&view, &config.dashboard.text_options())),
            }

            if let Some(error) = state.last_error {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
        }

        Commands::Endpoints => {
            let registry = EndpointRegistry::new(&config.api.base_url);

            println!("{:<20} {:<8} {}", "Dataset", "Sidebar", "Address");
            println!("{}", "-".repeat(72));
            for (key, address) in registry.iter() {
                println!(
                    "{:<20} {:<8} {}",
                    key.as_str(),
                    if key.is_wired() { "yes" } else { "-" },
                    address
                );
            }
            println!();
            println!(
                "{} of {} datasets are wired to the sidebar.",
                DatasetKey::WIRED.len(),
                DatasetKey::ALL.len()
            );
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn build_dispatcher(config: &Config) -> anyhow::Result<Dispatcher> {
    let client = AnalyticsClient::new(config.api.client_config())
        .context("creating analytics client")?;
    Ok(Dispatcher::new(Arc::new(client)))
}

/// Logs go to stderr so they never mix with rendered views
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ytviz={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
