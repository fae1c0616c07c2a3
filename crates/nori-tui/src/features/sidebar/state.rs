//! Sidebar state: per-tab selection, history snapshot, recommendation picks.

use enum_map::EnumMap;
use nori_core::backend::RemoteRecommendation;
use nori_core::recommendations::{self, Recommendation};
use nori_core::session::{Category, Exchange, Session, Tab};

/// Remote `/recommend` results, loaded once per session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RemoteRecommendations {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<RemoteRecommendation>),
    Failed,
}

/// One selectable row in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarEntry<'a> {
    Category(Category),
    History(&'a Exchange),
    Recommended {
        /// Category the question belongs to; remote picks have none.
        category: Option<Category>,
        question: &'a str,
        description: Option<&'a str>,
    },
}

#[derive(Debug)]
pub struct SidebarState {
    pub selected: usize,
    /// History as of the last time the history tab was entered.
    pub history: Vec<Exchange>,
    pub picks: EnumMap<Category, Vec<Recommendation>>,
    pub remote: RemoteRecommendations,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            selected: 0,
            history: Vec::new(),
            picks: recommendations::default_picks(),
            remote: RemoteRecommendations::default(),
        }
    }
}

impl SidebarState {
    /// Selectable rows for `tab`, top to bottom.
    pub fn entries(&self, tab: Tab) -> Vec<SidebarEntry<'_>> {
        match tab {
            Tab::Categories => Category::ALL.into_iter().map(SidebarEntry::Category).collect(),
            Tab::History => self.history.iter().map(SidebarEntry::History).collect(),
            Tab::Recommendations => {
                let mut entries: Vec<SidebarEntry<'_>> = Category::ALL
                    .into_iter()
                    .flat_map(|category| {
                        self.picks[category]
                            .iter()
                            .map(move |pick| SidebarEntry::Recommended {
                                category: Some(category),
                                question: pick.question,
                                description: Some(pick.description),
                            })
                    })
                    .collect();
                if let RemoteRecommendations::Loaded(remote) = &self.remote {
                    entries.extend(remote.iter().map(|r| SidebarEntry::Recommended {
                        category: None,
                        question: r.question.as_str(),
                        description: None,
                    }));
                }
                entries
            }
        }
    }

    pub fn selected_entry(&self, tab: Tab) -> Option<SidebarEntry<'_>> {
        self.entries(tab).get(self.selected).copied()
    }

    pub fn select_next(&mut self, tab: Tab) {
        let count = self.entries(tab).len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Re-reads the session's recent history and resets the selection.
    pub fn refresh_history(&mut self, session: &Session, limit: usize) {
        self.history = session.recent_history(limit).into_iter().cloned().collect();
        self.selected = 0;
    }

    /// Selects the first row of the active category's recommendation group.
    pub fn highlight_group(&mut self, category: Category) {
        self.selected = Category::ALL[..category.index()]
            .iter()
            .map(|c| self.picks[*c].len())
            .sum();
    }

    /// Points the selection at the tab's natural starting row.
    pub fn on_tab_entered(&mut self, session: &Session, history_limit: usize) {
        match session.active_tab() {
            Tab::Categories => self.selected = session.active_category().index(),
            Tab::History => self.refresh_history(session, history_limit),
            Tab::Recommendations => self.highlight_group(session.active_category()),
        }
    }

    /// Clamps the selection after entries changed underneath it.
    pub fn clamp(&mut self, tab: Tab) {
        let count = self.entries(tab).len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}
