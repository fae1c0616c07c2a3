//! In-memory chat session: active category, active tab, exchange log.
//!
//! A `Session` lives for one client run and is never persisted. It is owned
//! by the top-level state and mutated only through the methods here, so the
//! category invariant and the append-only log hold by construction.

mod category;

use std::fmt;

pub use category::{Category, CategoryInfo, GENERAL_LABEL, UnknownCategory};

/// Sidebar tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Categories,
    History,
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Categories, Tab::History, Tab::Recommendations];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Categories => "categories",
            Tab::History => "history",
            Tab::Recommendations => "recommendations",
        }
    }

    /// Label shown on the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Categories => "카테고리",
            Tab::History => "대화 기록",
            Tab::Recommendations => "추천 질문",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Categories => Tab::History,
            Tab::History => Tab::Recommendations,
            Tab::Recommendations => Tab::Categories,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Categories => Tab::Recommendations,
            Tab::History => Tab::Categories,
            Tab::Recommendations => Tab::History,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub question: String,
    /// `None` when the backend answered without a response body.
    pub answer: Option<String>,
    pub category_label: String,
    /// Local wall-clock time, `HH:MM:SS`.
    pub timestamp: String,
}

impl Exchange {
    /// Category recovered from the label, for iconography.
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.category_label)
    }
}

/// Outcome of a category change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySwitch {
    pub previous: Category,
    pub current: Category,
    /// Greeting to show after the settle delay, if one is due.
    pub greeting: Option<String>,
}

/// Transient state of one chat interaction.
#[derive(Debug, Clone, Default)]
pub struct Session {
    active_category: Category,
    active_tab: Tab,
    transcript: Vec<Exchange>,
}

impl Session {
    /// Creates a session with the defaults: `health`, `categories`, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Exchange log in insertion order.
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Sets the active category.
    ///
    /// A greeting is due unless `skip_greeting` is set or another tab than
    /// categories is showing.
    pub fn set_category(&mut self, category: Category, skip_greeting: bool) -> CategorySwitch {
        let previous = self.active_category;
        self.active_category = category;
        tracing::debug!(%previous, current = %category, "category changed");

        let greeting =
            (!skip_greeting && self.active_tab == Tab::Categories).then(|| category.greeting());

        CategorySwitch {
            previous,
            current: category,
            greeting,
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        let previous = self.active_tab;
        self.active_tab = tab;
        tracing::debug!(%previous, current = %tab, "tab changed");
    }

    /// Appends a completed exchange stamped with the current local time.
    ///
    /// `category` is the category the backend reported; `None` records the
    /// general label.
    pub fn record_exchange(
        &mut self,
        question: impl Into<String>,
        answer: Option<String>,
        category: Option<Category>,
    ) -> &Exchange {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.record_exchange_at(question, answer, category, timestamp)
    }

    /// Appends a completed exchange with an explicit timestamp.
    pub fn record_exchange_at(
        &mut self,
        question: impl Into<String>,
        answer: Option<String>,
        category: Option<Category>,
        timestamp: impl Into<String>,
    ) -> &Exchange {
        let category_label = category.map_or(GENERAL_LABEL, Category::title).to_string();
        let index = self.transcript.len();
        self.transcript.push(Exchange {
            question: question.into(),
            answer,
            category_label,
            timestamp: timestamp.into(),
        });
        &self.transcript[index]
    }

    /// Most recent exchanges first, at most `limit`.
    pub fn recent_history(&self, limit: usize) -> Vec<&Exchange> {
        self.transcript.iter().rev().take(limit).collect()
    }

    /// Drops the exchange log. Category and tab are kept.
    pub fn clear(&mut self) {
        tracing::info!(exchanges = self.transcript.len(), "session cleared");
        self.transcript.clear();
    }
}
