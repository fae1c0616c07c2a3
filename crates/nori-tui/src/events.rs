//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, the frame tick, and
//! results posted to the inbox by spawned tasks.

use std::path::PathBuf;

use crossterm::event::Event;
use enum_map::EnumMap;
use nori_core::backend::{ApiResult, ChatReply, HealthStatus, ModelInfo, RecommendReply};
use nori_core::recommendations::Recommendation;
use nori_core::session::Category;

use crate::common::{RequestId, TimerId};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation and render cadence.
    Tick,

    /// Current terminal size, delivered before the other events of a frame.
    Frame { width: u16, height: u16 },

    /// Raw crossterm event.
    Terminal(Event),

    /// A chat request settled.
    ChatCompleted {
        id: RequestId,
        /// Clear epoch the request was issued in.
        epoch: u64,
        question: String,
        result: ApiResult<ChatReply>,
    },

    /// Startup or on-demand health probe finished.
    HealthChecked { result: ApiResult<HealthStatus> },

    /// Model info arrived. `show` posts the full description as a notice.
    ModelInfoLoaded {
        show: bool,
        result: ApiResult<ModelInfo>,
    },

    /// Remote recommendations arrived.
    RecommendationsLoaded { result: ApiResult<RecommendReply> },

    /// A fresh shuffle of the built-in recommendations.
    RecommendationsShuffled {
        picks: EnumMap<Category, Vec<Recommendation>>,
    },

    /// A timer elapsed without being cancelled.
    TimerFired { id: TimerId },

    /// Export finished.
    ExportFinished { result: Result<PathBuf, String> },
}
