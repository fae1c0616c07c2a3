//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Session          (category, tab, exchange log)
//! │   ├── input: InputState
//! │   ├── transcript: TranscriptState (display cells)
//! │   ├── sidebar: SidebarState
//! │   ├── status_line: StatusLine
//! │   ├── chat: ChatTask            (in-flight request, stale tracking)
//! │   └── timers: Timers            (greeting, delayed send, notice dismiss)
//! └── overlay: Option<Overlay>
//! ```
//!
//! The overlay lives beside `TuiState` so overlay key handlers can borrow
//! the overlay mutably while reading the rest of the state.

use std::time::Duration;

use nori_core::config::Config;
use nori_core::session::Session;

use crate::common::{ChatTask, TimerKind, Timers};
use crate::effects::UiEffect;
use crate::input::InputState;
use crate::overlays::Overlay;
use crate::sidebar::SidebarState;
use crate::statusline::StatusLine;
use crate::transcript::TranscriptState;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: &Config, backend_url: &str) -> Self {
        Self {
            tui: TuiState::new(config, backend_url),
            overlay: None,
        }
    }
}

/// Which pane receives plain keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Sidebar,
}

/// Delays taken from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub greeting: Duration,
    pub notice_dismiss: Duration,
    pub recommended_send: Duration,
}

impl Timing {
    pub fn from_config(config: &Config) -> Self {
        Self {
            greeting: config.greeting_delay(),
            notice_dismiss: config.notice_dismiss(),
            recommended_send: config.recommended_send_delay(),
        }
    }
}

pub struct TuiState {
    pub session: Session,
    pub input: InputState,
    pub transcript: TranscriptState,
    pub sidebar: SidebarState,
    pub status_line: StatusLine,
    pub chat: ChatTask,
    pub timers: Timers,
    pub focus: Focus,
    pub timing: Timing,
    pub history_limit: usize,
    pub recommend_limit: u32,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(config: &Config, backend_url: &str) -> Self {
        Self {
            session: Session::new(),
            input: InputState::default(),
            transcript: TranscriptState::default(),
            sidebar: SidebarState::default(),
            status_line: StatusLine::new(backend_url),
            chat: ChatTask::default(),
            timers: Timers::default(),
            focus: Focus::default(),
            timing: Timing::from_config(config),
            history_limit: config.history_limit,
            recommend_limit: config.recommend_limit,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        !self.chat.is_running()
    }

    /// Arms a timer and returns the effect that starts it.
    pub fn start_timer(&mut self, kind: TimerKind, delay: Duration) -> UiEffect {
        let (id, cancel) = self.timers.arm(kind);
        UiEffect::StartTimer { id, delay, cancel }
    }

    /// Posts a self-dismissing notice. Duplicates post nothing.
    pub fn post_notice(&mut self, text: &str) -> Vec<UiEffect> {
        match self.transcript.post_notice(text) {
            Some(cell) => {
                let delay = self.timing.notice_dismiss;
                vec![self.start_timer(TimerKind::DismissNotice(cell), delay)]
            }
            None => vec![],
        }
    }

    /// Cancels every armed timer matching `pred`.
    pub fn cancel_timers(&mut self, pred: impl Fn(&TimerKind) -> bool) -> Vec<UiEffect> {
        self.timers
            .cancel_where(pred)
            .into_iter()
            .map(|token| UiEffect::CancelTimer { token })
            .collect()
    }
}
