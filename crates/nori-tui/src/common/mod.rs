//! Shared helpers for the TUI.

pub mod commands;
pub mod style;
mod task;
mod text;

pub use task::{ChatTask, InFlight, RequestId, RequestSeq, TimerId, TimerKind, Timers};
pub use text::{sanitize_for_display, truncate_with_ellipsis, wrap_text};
