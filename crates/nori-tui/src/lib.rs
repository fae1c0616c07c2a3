//! Full-screen TUI for Nori.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::path::PathBuf;

use anyhow::Result;
pub use features::{chat, input, sidebar, statusline, transcript};
use nori_core::backend::BackendClient;
use nori_core::config::Config;
pub use runtime::TuiRuntime;

use crate::transcript::ChatCell;

/// Runs the interactive chat UI against `client` until the user quits.
///
/// Exports are written to `export_dir`.
pub async fn run_interactive_chat(
    config: &Config,
    client: BackendClient,
    export_dir: PathBuf,
) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Chat mode requires a terminal.\n\
             Use `nori ask '...'` for non-interactive use."
        );
    }

    let mut err = stderr();
    writeln!(err, "Nori")?;
    writeln!(err, "Backend: {}", client.base_url())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config, client, export_dir)?;

    let config_path = nori_core::config::paths::config_path();
    if config_path.exists() {
        runtime
            .state
            .tui
            .transcript
            .push(ChatCell::system(format!("설정 파일: {}", config_path.display())));
    }

    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
