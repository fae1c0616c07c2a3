//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that do the I/O and return the `UiEvent`
//! carrying the result. They never touch state; the runtime spawns them and
//! forwards the event to the inbox.

use std::path::PathBuf;
use std::time::Duration;

use nori_core::backend::{BackendClient, ChatRequest};
use nori_core::export::{self, Speaker};
use nori_core::session::Category;
use tokio_util::sync::CancellationToken;

use crate::common::{RequestId, TimerId};
use crate::events::UiEvent;

pub async fn send_chat(
    client: BackendClient,
    id: RequestId,
    epoch: u64,
    request: ChatRequest,
) -> UiEvent {
    let result = client.send_chat(&request).await;
    UiEvent::ChatCompleted {
        id,
        epoch,
        question: request.message,
        result,
    }
}

pub async fn check_health(client: BackendClient) -> UiEvent {
    UiEvent::HealthChecked {
        result: client.health().await,
    }
}

pub async fn load_model_info(client: BackendClient, show: bool) -> UiEvent {
    UiEvent::ModelInfoLoaded {
        show,
        result: client.model_info().await,
    }
}

pub async fn load_recommendations(client: BackendClient, user_id: String, limit: u32) -> UiEvent {
    UiEvent::RecommendationsLoaded {
        result: client.recommend(&user_id, limit).await,
    }
}

/// Sleeps for `delay`. Returns `None` when cancelled first.
pub async fn run_timer(id: TimerId, delay: Duration, cancel: CancellationToken) -> Option<UiEvent> {
    tokio::select! {
        () = cancel.cancelled() => None,
        () = tokio::time::sleep(delay) => Some(UiEvent::TimerFired { id }),
    }
}

pub async fn export_transcript(
    dir: PathBuf,
    category: Category,
    lines: Vec<(Speaker, String)>,
) -> UiEvent {
    let result = tokio::task::spawn_blocking(move || {
        let borrowed: Vec<(Speaker, &str)> = lines
            .iter()
            .map(|(speaker, text)| (*speaker, text.as_str()))
            .collect();
        export::write_export(&dir, category, &borrowed)
    })
    .await;

    let result = match result {
        Ok(Ok(path)) => Ok(path),
        Ok(Err(err)) => {
            tracing::warn!(error = %format!("{err:#}"), "transcript export failed");
            Err(format!("{err:#}"))
        }
        Err(join) => Err(join.to_string()),
    };
    UiEvent::ExportFinished { result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let id = TimerId(7);
        let event = run_timer(id, Duration::from_millis(500), CancellationToken::new()).await;
        assert!(matches!(event, Some(UiEvent::TimerFired { id: fired }) if fired == id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_yields_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let event = run_timer(TimerId(1), Duration::from_secs(3), cancel).await;
        assert!(event.is_none());
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let event = export_transcript(
            dir.path().to_path_buf(),
            Category::Travel,
            vec![
                (Speaker::User, "부산 여행지 추천".to_string()),
                (Speaker::Bot, "해운대를 추천해요.".to_string()),
            ],
        )
        .await;

        let UiEvent::ExportFinished { result: Ok(path) } = &event else {
            panic!("export failed: {event:?}");
        };
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("해운대를 추천해요."));
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_error() {
        let client = BackendClient::new(
            nori_core::backend::BackendConfig::new("http://127.0.0.1:9")
                .with_timeout(Some(Duration::from_secs(2))),
        )
        .unwrap();
        let event = check_health(client).await;
        assert!(matches!(event, UiEvent::HealthChecked { result: Err(_) }));
    }
}
