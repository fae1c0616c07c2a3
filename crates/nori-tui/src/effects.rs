//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O, timers and task spawning only; the reducer never
//! touches the network, the clock or the filesystem itself.
//!
//! ## Cancellation
//!
//! Timers are armed in state first (`Timers::arm`) and the token travels
//! with `StartTimer`. Cancelling is `UiEffect::CancelTimer`; the runtime just
//! calls `cancel()` on the token.

use std::time::Duration;

use nori_core::backend::ChatRequest;
use nori_core::export::Speaker;
use nori_core::session::Category;
use tokio_util::sync::CancellationToken;

use crate::common::{RequestId, TimerId};

#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// POST the message to the chat endpoint.
    SendChat {
        id: RequestId,
        epoch: u64,
        request: ChatRequest,
    },

    /// GET /health.
    CheckHealth,

    /// GET /api/model-info.
    LoadModelInfo { show: bool },

    /// POST /recommend.
    LoadRecommendations { user_id: String, limit: u32 },

    /// Draw a new random set of built-in recommendations.
    ShuffleRecommendations,

    /// Sleep `delay`, then post `TimerFired` unless cancelled.
    StartTimer {
        id: TimerId,
        delay: Duration,
        cancel: CancellationToken,
    },

    /// Cancel an armed timer.
    CancelTimer { token: CancellationToken },

    /// Write the visible conversation to a text file.
    ExportTranscript {
        category: Category,
        lines: Vec<(Speaker, String)>,
    },
}
