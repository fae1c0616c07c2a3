//! Message dispatcher slice.
//!
//! Turns a submitted input into display cells and a `SendChat` effect, and
//! applies settled requests back onto the session and the transcript.

use nori_core::backend::{ApiResult, ChatReply};
use nori_core::dispatch::{self, Resolution};

use crate::common::{RequestId, TimerKind};
use crate::effects::UiEffect;
use crate::state::TuiState;
use crate::transcript::ChatCell;

/// Sends `text` under the active category.
///
/// Blank text and sends while a request is in flight are no-ops.
pub fn send_message(tui: &mut TuiState, text: &str) -> Vec<UiEffect> {
    if !tui.can_send() {
        tracing::debug!("send ignored: request in flight");
        return vec![];
    }
    let Some(question) = dispatch::normalize_input(text) else {
        return vec![];
    };

    tui.transcript.push(ChatCell::user(question));
    tui.input.clear();
    tui.transcript.show_typing(tui.session.active_category());

    let request = dispatch::outbound(&tui.session, question);
    let id = tui.chat.start(question);
    tracing::info!(request = id.0, category = %request.category, "chat request issued");

    vec![UiEffect::SendChat {
        id,
        epoch: tui.chat.epoch,
        request,
    }]
}

/// Sends whatever is in the input box.
pub fn submit_input(tui: &mut TuiState) -> Vec<UiEffect> {
    let text = tui.input.text().to_string();
    send_message(tui, &text)
}

/// Applies a settled chat request.
pub fn on_chat_completed(
    tui: &mut TuiState,
    id: RequestId,
    epoch: u64,
    question: &str,
    result: ApiResult<ChatReply>,
) -> Vec<UiEffect> {
    if !tui.chat.settle(id, epoch) {
        tracing::debug!(request = id.0, "discarding stale chat response");
        return vec![];
    }

    tui.transcript.hide_typing();
    let resolution = dispatch::resolve(&mut tui.session, question, result);

    let mut effects = Vec::new();
    if let Resolution::Answered {
        switched: Some(switch),
        ..
    } = &resolution
    {
        tracing::info!(from = %switch.previous, to = %switch.current, "backend moved category");
        effects.extend(tui.cancel_timers(|k| matches!(k, TimerKind::Greeting(_))));
    }

    tui.transcript
        .push(ChatCell::bot(resolution.text(), tui.session.active_category()));
    effects
}
