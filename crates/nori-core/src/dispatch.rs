//! Message dispatch rules shared by the interactive and one-shot clients.
//!
//! The network call itself is made by the caller; this module decides what
//! goes out and what a settled call does to the session.

use crate::backend::{ApiError, ApiResult, ChatReply, ChatRequest};
use crate::session::{Category, CategorySwitch, Session};

/// Shown when the backend answered without a response text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "죄송합니다. 응답을 받지 못했습니다.";

/// Shown when the backend could not be reached.
pub const UNREACHABLE_FALLBACK: &str =
    "백엔드 서버에 연결할 수 없습니다.\n\n💡 네트워크 연결 문제가 발생했습니다.\n잠시 후 다시 시도해주세요.";

/// Shown for every other failure (bad status, malformed body).
pub const GENERIC_FALLBACK: &str =
    "죄송합니다. 일시적인 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Returns the trimmed message, or `None` when there is nothing to send.
pub fn normalize_input(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Synthetic per-request user identifier, `user_<unix millis>`.
pub fn synthetic_user_id() -> String {
    format!("user_{}", chrono::Utc::now().timestamp_millis())
}

/// Builds the outbound request for `question` under the active category.
pub fn outbound(session: &Session, question: &str) -> ChatRequest {
    ChatRequest {
        message: question.to_string(),
        category: session.active_category(),
        user_id: synthetic_user_id(),
    }
}

/// Which fallback a failed send shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unreachable,
    Generic,
}

impl FailureKind {
    pub fn of(err: &ApiError) -> Self {
        if err.is_unreachable() {
            FailureKind::Unreachable
        } else {
            FailureKind::Generic
        }
    }

    pub fn fallback_text(self) -> &'static str {
        match self {
            FailureKind::Unreachable => UNREACHABLE_FALLBACK,
            FailureKind::Generic => GENERIC_FALLBACK,
        }
    }
}

/// What a settled send did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Answered {
        /// Bot text to render.
        text: String,
        /// Set when the backend moved the conversation to another category.
        switched: Option<CategorySwitch>,
    },
    Failed {
        /// Fallback bot text to render.
        text: &'static str,
        kind: FailureKind,
    },
}

impl Resolution {
    /// Bot text to render for this outcome.
    pub fn text(&self) -> &str {
        match self {
            Resolution::Answered { text, .. } => text.as_str(),
            Resolution::Failed { text, .. } => *text,
        }
    }
}

/// Applies a settled send to the session.
///
/// Success records the exchange and follows a category change reported by
/// the backend (greeting skipped). Failure is logged and leaves the session
/// untouched.
pub fn resolve(session: &mut Session, question: &str, result: ApiResult<ChatReply>) -> Resolution {
    match result {
        Ok(reply) => {
            let reported = reply.category.as_deref().and_then(|raw| {
                raw.parse::<Category>()
                    .map_err(|err| tracing::warn!("ignoring category from backend: {err}"))
                    .ok()
            });

            let switched = reported
                .filter(|category| *category != session.active_category())
                .map(|category| session.set_category(category, true));

            let answer = reply.response.filter(|text| !text.trim().is_empty());
            let text = answer
                .clone()
                .unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string());

            session.record_exchange(question, answer, reported);
            tracing::info!(exchanges = session.transcript().len(), "exchange recorded");

            Resolution::Answered { text, switched }
        }
        Err(err) => {
            let kind = FailureKind::of(&err);
            tracing::warn!(
                error = %err,
                kind = %err.kind,
                details = err.details.as_deref().unwrap_or(""),
                "chat request failed"
            );
            Resolution::Failed {
                text: kind.fallback_text(),
                kind,
            }
        }
    }
}
