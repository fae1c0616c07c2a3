//! Ask command handler (one-shot send).

use anyhow::{Context, Result};
use nori_core::backend::BackendClient;
use nori_core::dispatch::{self, Resolution};
use nori_core::session::{Category, Session};

/// Sends `message` under `category` and prints the bot reply to stdout.
///
/// A failed send still prints the fallback text, then exits non-zero.
pub async fn run(client: &BackendClient, message: &str, category: Option<&str>) -> Result<()> {
    let Some(question) = dispatch::normalize_input(message) else {
        anyhow::bail!("Message is empty");
    };

    let mut session = Session::new();
    if let Some(raw) = category {
        let category: Category = raw.parse().context("parse --category")?;
        session.set_category(category, true);
    }

    let request = dispatch::outbound(&session, question);
    let result = client.send_chat(&request).await;

    match dispatch::resolve(&mut session, question, result) {
        Resolution::Answered { text, switched } => {
            if let Some(switch) = switched {
                eprintln!("[{} → {}]", switch.previous, switch.current);
            }
            println!("{text}");
            Ok(())
        }
        Resolution::Failed { text, kind } => {
            println!("{text}");
            anyhow::bail!("Chat request failed ({kind:?})")
        }
    }
}
