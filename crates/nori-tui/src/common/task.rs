use std::collections::HashMap;

use nori_core::session::Category;
use tokio_util::sync::CancellationToken;

use crate::features::transcript::CellId;

/// Identifier of one chat request. Ids only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Default)]
pub struct RequestSeq {
    next: u64,
}

impl RequestSeq {
    pub fn next_id(&mut self) -> RequestId {
        self.next = self.next.wrapping_add(1);
        RequestId(self.next)
    }
}

/// The chat request currently holding the send control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub id: RequestId,
    pub question: String,
}

/// Dispatcher lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default)]
pub struct ChatTask {
    pub seq: RequestSeq,
    pub in_flight: Option<InFlight>,
    pub last_completed: Option<RequestId>,
    /// Bumped on every clear; completions from an older epoch are stale.
    pub epoch: u64,
}

impl ChatTask {
    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn start(&mut self, question: &str) -> RequestId {
        let id = self.seq.next_id();
        self.in_flight = Some(InFlight {
            id,
            question: question.to_string(),
        });
        id
    }

    /// Settles request `id`. Releases the send control if `id` holds it and
    /// reports whether the result may still be applied.
    pub fn settle(&mut self, id: RequestId, epoch: u64) -> bool {
        if self.in_flight.as_ref().is_some_and(|f| f.id == id) {
            self.in_flight = None;
        }
        let stale =
            epoch != self.epoch || self.last_completed.is_some_and(|last| id <= last);
        if !stale {
            self.last_completed = Some(id);
        }
        !stale
    }

    /// Makes everything issued so far stale and frees the send control.
    pub fn invalidate(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.in_flight = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerKind {
    /// Posts the category greeting.
    Greeting(Category),
    /// Sends a recommended question placed in the input.
    SendRecommended(String),
    /// Removes a system notice.
    DismissNotice(CellId),
}

#[derive(Debug)]
struct PendingTimer {
    kind: TimerKind,
    cancel: CancellationToken,
}

/// Armed timers. A fired timer that is no longer here was cancelled.
#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
    pending: HashMap<TimerId, PendingTimer>,
}

impl Timers {
    /// Registers a timer and returns its id with the token the runtime waits on.
    pub fn arm(&mut self, kind: TimerKind) -> (TimerId, CancellationToken) {
        self.next = self.next.wrapping_add(1);
        let id = TimerId(self.next);
        let cancel = CancellationToken::new();
        self.pending.insert(
            id,
            PendingTimer {
                kind,
                cancel: cancel.clone(),
            },
        );
        (id, cancel)
    }

    /// Removes a fired timer, returning its kind if it was still armed.
    pub fn fire(&mut self, id: TimerId) -> Option<TimerKind> {
        self.pending.remove(&id).map(|timer| timer.kind)
    }

    /// Disarms every timer matching `pred` and returns their tokens.
    pub fn cancel_where(&mut self, pred: impl Fn(&TimerKind) -> bool) -> Vec<CancellationToken> {
        let ids: Vec<TimerId> = self
            .pending
            .iter()
            .filter(|(_, timer)| pred(&timer.kind))
            .map(|(id, _)| *id)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.pending.remove(&id))
            .map(|timer| timer.cancel)
            .collect()
    }

    pub fn cancel_all(&mut self) -> Vec<CancellationToken> {
        self.cancel_where(|_| true)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
