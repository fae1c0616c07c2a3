//! Chat command handler (default mode).

use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use nori_core::backend::BackendClient;
use nori_core::config::{self, Config};
use nori_core::logging;
use tracing::Instrument;

use super::ask;

pub async fn run(config: &Config, client: BackendClient) -> Result<()> {
    // If stdin is piped, send it as a one-shot message instead
    if !std::io::stdin().is_terminal() {
        let mut message = String::new();
        std::io::stdin().lock().read_to_string(&mut message)?;
        if message.trim().is_empty() {
            anyhow::bail!("No input provided via pipe");
        }
        logging::init_stderr(&config.log_filter);
        return ask::run(&client, &message, None).await;
    }

    let log_dir = config::paths::logs_dir();
    let _log_guard = match logging::init_file(&log_dir, &config.log_filter) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    let export_dir = std::env::current_dir().context("resolve current directory")?;
    let span = tracing::info_span!("session", id = %uuid::Uuid::new_v4());
    async {
        tracing::info!(backend = client.base_url(), "interactive session started");
        nori_tui::run_interactive_chat(config, client, export_dir).await
    }
    .instrument(span)
    .await
    .context("interactive chat failed")?;

    Ok(())
}
