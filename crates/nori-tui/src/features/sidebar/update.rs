//! Session navigation: category switches, tab switches, sidebar activation.

use nori_core::dispatch;
use nori_core::session::{Category, Tab};

use super::state::{RemoteRecommendations, SidebarEntry};
use crate::common::TimerKind;
use crate::effects::UiEffect;
use crate::state::{Focus, TuiState};

/// Sets the active category, scheduling the greeting when one is due.
///
/// A greeting still pending for an earlier switch is cancelled.
pub fn set_category(tui: &mut TuiState, category: Category, skip_greeting: bool) -> Vec<UiEffect> {
    let mut effects = tui.cancel_timers(|k| matches!(k, TimerKind::Greeting(_)));
    let switch = tui.session.set_category(category, skip_greeting);

    if switch.greeting.is_some() {
        let delay = tui.timing.greeting;
        effects.push(tui.start_timer(TimerKind::Greeting(category), delay));
    }
    if tui.session.active_tab() == Tab::Recommendations {
        tui.sidebar.highlight_group(category);
    }
    effects
}

/// Category picked from the sidebar or a hotkey: greet, then show the
/// categories tab.
pub fn pick_category(tui: &mut TuiState, category: Category) -> Vec<UiEffect> {
    let mut effects = set_category(tui, category, false);
    if tui.session.active_tab() != Tab::Categories {
        effects.extend(switch_tab(tui, Tab::Categories));
    }
    effects
}

pub fn switch_tab(tui: &mut TuiState, tab: Tab) -> Vec<UiEffect> {
    tui.session.switch_tab(tab);
    tui.sidebar.on_tab_entered(&tui.session, tui.history_limit);

    if tab == Tab::Recommendations && tui.sidebar.remote == RemoteRecommendations::NotLoaded {
        tui.sidebar.remote = RemoteRecommendations::Loading;
        return vec![UiEffect::LoadRecommendations {
            user_id: dispatch::synthetic_user_id(),
            limit: tui.recommend_limit,
        }];
    }
    vec![]
}

/// Switches to the target category (greeting skipped), announces it, puts
/// the question in the input and sends it after a short delay.
pub fn ask_recommended(
    tui: &mut TuiState,
    target: Option<Category>,
    question: &str,
) -> Vec<UiEffect> {
    let target = target.unwrap_or(tui.session.active_category());
    let mut effects = Vec::new();

    if target != tui.session.active_category() {
        effects.extend(set_category(tui, target, true));
    }
    effects.extend(tui.post_notice(&format!("🔄 {} 카테고리로 전환했습니다.", target.title())));

    tui.input.set_text(question);
    tui.focus = Focus::Input;

    effects.extend(tui.cancel_timers(|k| matches!(k, TimerKind::SendRecommended(_))));
    let delay = tui.timing.recommended_send;
    effects.push(tui.start_timer(TimerKind::SendRecommended(question.to_string()), delay));

    if tui.session.active_tab() == Tab::Recommendations {
        tui.sidebar.highlight_group(target);
    }
    effects
}

/// Acts on the highlighted sidebar row.
pub fn activate_selection(tui: &mut TuiState) -> Vec<UiEffect> {
    enum Action {
        Category(Category),
        Reuse(String),
        Ask(Option<Category>, String),
    }

    let action = match tui.sidebar.selected_entry(tui.session.active_tab()) {
        Some(SidebarEntry::Category(category)) => Action::Category(category),
        Some(SidebarEntry::History(exchange)) => Action::Reuse(exchange.question.clone()),
        Some(SidebarEntry::Recommended {
            category, question, ..
        }) => Action::Ask(category, question.to_string()),
        None => return vec![],
    };

    match action {
        Action::Category(category) => pick_category(tui, category),
        Action::Reuse(question) => {
            tui.input.set_text(question);
            tui.focus = Focus::Input;
            switch_tab(tui, Tab::Categories)
        }
        Action::Ask(category, question) => ask_recommended(tui, category, &question),
    }
}
