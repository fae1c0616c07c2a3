//! Backend probe command handlers.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use nori_core::backend::{ApiErrorKind, BackendClient};
use nori_core::dispatch;

pub async fn health(client: &BackendClient) -> Result<()> {
    match client.health().await {
        Ok(status) => {
            println!("Backend: {} (connected)", client.base_url());
            println!("Status:  {}", status.status.as_deref().unwrap_or("unknown"));
            println!("Model:   {}", status.model_name());
            if let Some(model_status) = status.model_status.as_deref() {
                println!("Model status: {model_status}");
            }
            Ok(())
        }
        Err(err) if err.kind == ApiErrorKind::HttpStatus => {
            anyhow::bail!("Backend at {} is not ready yet: {err}", client.base_url())
        }
        Err(err) => anyhow::bail!("Backend at {} is unreachable: {err}", client.base_url()),
    }
}

pub async fn model_info(client: &BackendClient) -> Result<()> {
    let info = client.model_info().await?;
    println!("{}", info.describe());
    Ok(())
}

pub async fn recommend(client: &BackendClient, limit: u32) -> Result<()> {
    let reply = client
        .recommend(&dispatch::synthetic_user_id(), limit)
        .await?;

    if reply.recommendations.is_empty() {
        println!("No recommendations.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Question", "Score"]);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (i, rec) in reply.recommendations.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            rec.question.clone(),
            format!("{:.2}", rec.score),
        ]);
    }
    println!("{table}");
    Ok(())
}
