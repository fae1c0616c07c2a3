use std::sync::atomic::{AtomicU64, Ordering};

use nori_core::session::Category;

static CELL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a transcript cell.
///
/// Notice dismiss timers address their cell by id, so ids are never reused
/// within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub u64);

impl CellId {
    pub fn new() -> Self {
        CellId(CELL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for CellId {
    fn default() -> Self {
        Self::new()
    }
}

/// Local wall-clock stamp shown under user and bot messages.
pub fn clock_stamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// One block in the chat view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCell {
    User {
        id: CellId,
        text: String,
        time: String,
    },
    /// Bot message, drawn in the colour of the category active when it arrived.
    Bot {
        id: CellId,
        text: String,
        time: String,
        category: Category,
    },
    /// Transient notice, removed by its dismiss timer.
    System { id: CellId, text: String },
    /// Typing indicator while a request is in flight.
    Typing { id: CellId, category: Category },
}

impl ChatCell {
    pub fn id(&self) -> CellId {
        match self {
            ChatCell::User { id, .. }
            | ChatCell::Bot { id, .. }
            | ChatCell::System { id, .. }
            | ChatCell::Typing { id, .. } => *id,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        ChatCell::User {
            id: CellId::new(),
            text: text.into(),
            time: clock_stamp(),
        }
    }

    pub fn bot(text: impl Into<String>, category: Category) -> Self {
        ChatCell::Bot {
            id: CellId::new(),
            text: text.into(),
            time: clock_stamp(),
            category,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        ChatCell::System {
            id: CellId::new(),
            text: text.into(),
        }
    }

    pub fn typing(category: Category) -> Self {
        ChatCell::Typing {
            id: CellId::new(),
            category,
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self, ChatCell::Typing { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ChatCell::User { text, .. }
            | ChatCell::Bot { text, .. }
            | ChatCell::System { text, .. } => Some(text),
            ChatCell::Typing { .. } => None,
        }
    }
}
