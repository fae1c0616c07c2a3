//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use nori_core::backend::{BackendClient, BackendConfig};
use nori_core::config::Config;
use nori_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "nori")]
#[command(version)]
#[command(about = "Nori - terminal client for the AI Playground")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides NORI_BACKEND_URL and config)
    #[arg(long, global = true, value_name = "URL")]
    backend: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Send one message and print the answer
    Ask {
        /// The message to send
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Category to ask in (health, travel, investment, legal)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Probe the backend health endpoint
    Health,

    /// Show the model the backend is running
    ModelInfo,

    /// Fetch recommended questions from the backend
    Recommend {
        /// Number of recommendations to request
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// List the available categories
    Categories,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Save the backend URL to the config file
    SetBackend {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    let Cli { command, backend } = cli;

    // default to chat mode
    let Some(command) = command else {
        let client = backend_client(&config, backend.as_deref())?;
        return commands::chat::run(&config, client).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetBackend { url } => commands::config::set_backend(&url),
        },
        Commands::Categories => {
            commands::categories::list();
            Ok(())
        }
        Commands::Ask { message, category } => {
            let client = one_shot_client(&config, backend.as_deref())?;
            commands::ask::run(&client, &message, category.as_deref()).await
        }
        Commands::Health => {
            let client = one_shot_client(&config, backend.as_deref())?;
            commands::backend::health(&client).await
        }
        Commands::ModelInfo => {
            let client = one_shot_client(&config, backend.as_deref())?;
            commands::backend::model_info(&client).await
        }
        Commands::Recommend { limit } => {
            let client = one_shot_client(&config, backend.as_deref())?;
            commands::backend::recommend(&client, limit.unwrap_or(config.recommend_limit)).await
        }
    }
}

/// One-shot commands log to stderr; stdout carries the result.
fn one_shot_client(config: &Config, flag: Option<&str>) -> Result<BackendClient> {
    logging::init_stderr(&config.log_filter);
    backend_client(config, flag)
}

fn backend_client(config: &Config, flag: Option<&str>) -> Result<BackendClient> {
    let url = config.resolve_backend_url(flag)?;
    let client = BackendClient::new(BackendConfig::new(url).with_timeout(config.request_timeout()))
        .context("create backend client")?;
    Ok(client)
}
