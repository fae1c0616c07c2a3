//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nori_core::backend::{ApiErrorKind, ApiResult, HealthStatus, ModelInfo, RecommendReply};
use nori_core::session::{Category, Tab};
use ratatui::layout::Rect;

use crate::common::TimerKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::StateMutation;
use crate::overlays::{Overlay, OverlayRequest, OverlayTransition, OverlayUpdate};
use crate::sidebar::RemoteRecommendations;
use crate::state::{AppState, Focus, TuiState};
use crate::statusline::BackendStatus;
use crate::render::ScreenLayout;
use crate::transcript::{ChatCell, PAGE_SCROLL_LINES, transcript_lines};
use crate::{chat, sidebar};

pub const BACKEND_CONNECTED_PREFIX: &str = "🟢 백엔드 서버 연결 성공! 모델: ";
pub const BACKEND_NOT_READY: &str = "🔄 백엔드 서버가 아직 준비되지 않았습니다. 잠시만 기다려주세요...";
pub const BACKEND_STARTING: &str = "🔄 백엔드 서버가 시작되고 있습니다...";
pub const MODEL_INFO_UNAVAILABLE: &str = "❌ 모델 정보를 가져올 수 없습니다.";
pub const MODEL_INFO_FAILED: &str = "❌ 모델 정보 조회 중 오류가 발생했습니다.";
pub const NOTHING_TO_EXPORT: &str = "💡 내보낼 대화가 없습니다.";

/// Effects to run once when the UI starts: probe the backend.
pub fn startup() -> Vec<UiEffect> {
    vec![UiEffect::CheckHealth, UiEffect::LoadModelInfo { show: false }]
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.tui.transcript.has_typing() {
                app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ChatCompleted {
            id,
            epoch,
            question,
            result,
        } => chat::on_chat_completed(&mut app.tui, id, epoch, &question, result),
        UiEvent::HealthChecked { result } => handle_health(&mut app.tui, result),
        UiEvent::ModelInfoLoaded { show, result } => handle_model_info(&mut app.tui, show, result),
        UiEvent::RecommendationsLoaded { result } => {
            handle_recommendations(&mut app.tui, result);
            vec![]
        }
        UiEvent::RecommendationsShuffled { picks } => {
            let tui = &mut app.tui;
            tui.sidebar.picks = picks;
            if tui.session.active_tab() == Tab::Recommendations {
                tui.sidebar.highlight_group(tui.session.active_category());
            }
            vec![]
        }
        UiEvent::TimerFired { id } => match app.tui.timers.fire(id) {
            Some(kind) => handle_timer(&mut app.tui, kind),
            None => vec![],
        },
        UiEvent::ExportFinished { result } => {
            let text = match result {
                Ok(path) => format!("💾 대화 내역을 저장했습니다: {}", path.display()),
                Err(err) => format!("❌ 대화 내역을 저장하지 못했습니다: {err}"),
            };
            app.tui.post_notice(&text)
        }
    }
}

// ============================================================================
// Frame Handler
// ============================================================================

/// Refreshes the transcript's scroll bounds for the current terminal size.
fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    let area = ScreenLayout::new(Rect::new(0, 0, width, height)).transcript;
    let total = transcript_lines(&tui.transcript, area.width as usize, 0).len();
    tui.transcript.update_layout(total, area.height as usize);
}

// ============================================================================
// Terminal input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) if app.overlay.is_none() => {
            app.tui.focus = Focus::Input;
            app.tui.input.insert_str(&text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        return apply_overlay_update(app, update);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let tui = &mut app.tui;

    match key.code {
        KeyCode::Char('c') if ctrl => apply_mutation(tui, StateMutation::Quit),
        KeyCode::Char('o') if ctrl => open_overlay(app, OverlayRequest::CommandPalette),
        KeyCode::Char('l') if ctrl => open_overlay(app, OverlayRequest::ConfirmClear),
        KeyCode::Char('s') if ctrl => apply_mutation(tui, StateMutation::Export),
        KeyCode::Char('r') if ctrl => apply_mutation(tui, StateMutation::Shuffle),
        KeyCode::F(2) => apply_mutation(tui, StateMutation::ShowModelInfo),
        KeyCode::F(5) => apply_mutation(tui, StateMutation::CheckHealth),
        KeyCode::Char(c @ '1'..='4') if alt => {
            let index = c as usize - '1' as usize;
            sidebar::pick_category(tui, Category::ALL[index])
        }
        KeyCode::Tab | KeyCode::BackTab => {
            tui.focus = match tui.focus {
                Focus::Input => Focus::Sidebar,
                Focus::Sidebar => Focus::Input,
            };
            vec![]
        }
        KeyCode::PageUp => {
            tui.transcript.scroll_up(PAGE_SCROLL_LINES);
            vec![]
        }
        KeyCode::PageDown => {
            tui.transcript.scroll_down(PAGE_SCROLL_LINES);
            vec![]
        }
        _ => match tui.focus {
            Focus::Input => handle_input_key(app, key),
            Focus::Sidebar => handle_sidebar_key(tui, key),
        },
    }
}

fn handle_input_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let tui = &mut app.tui;
    let input = &mut tui.input;

    match key.code {
        KeyCode::Enter => return chat::submit_input(tui),
        KeyCode::Char('/') if input.is_empty() => {
            return open_overlay(app, OverlayRequest::CommandPalette);
        }
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(c) if !ctrl => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Esc => input.clear(),
        _ => {}
    }
    vec![]
}

fn handle_sidebar_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let tab = tui.session.active_tab();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => sidebar::switch_tab(tui, tab.prev()),
        KeyCode::Right | KeyCode::Char('l') => sidebar::switch_tab(tui, tab.next()),
        KeyCode::Up | KeyCode::Char('k') => {
            tui.sidebar.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            tui.sidebar.select_next(tab);
            vec![]
        }
        KeyCode::Enter => sidebar::activate_selection(tui),
        KeyCode::Esc => {
            tui.focus = Focus::Input;
            vec![]
        }
        _ => vec![],
    }
}

// ============================================================================
// Overlays and mutations
// ============================================================================

fn open_overlay(app: &mut AppState, request: OverlayRequest) -> Vec<UiEffect> {
    app.overlay = Some(Overlay::open(request));
    vec![]
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    match update.transition {
        OverlayTransition::Stay => {}
        OverlayTransition::Close => app.overlay = None,
        OverlayTransition::Open(request) => app.overlay = Some(Overlay::open(request)),
    }
    apply_mutations(&mut app.tui, update.mutations)
}

pub fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) -> Vec<UiEffect> {
    mutations
        .into_iter()
        .flat_map(|mutation| apply_mutation(tui, mutation))
        .collect()
}

fn apply_mutation(tui: &mut TuiState, mutation: StateMutation) -> Vec<UiEffect> {
    match mutation {
        StateMutation::ClearConversation => clear_conversation(tui),
        StateMutation::PickCategory(category) => sidebar::pick_category(tui, category),
        StateMutation::Export => request_export(tui),
        StateMutation::Shuffle => vec![UiEffect::ShuffleRecommendations],
        StateMutation::ShowModelInfo => vec![UiEffect::LoadModelInfo { show: true }],
        StateMutation::CheckHealth => vec![UiEffect::CheckHealth],
        StateMutation::Quit => vec![UiEffect::Quit],
    }
}

/// Confirmed reset: empties the log and the view, cancels timers and makes
/// any in-flight response stale. Category and tab are kept.
fn clear_conversation(tui: &mut TuiState) -> Vec<UiEffect> {
    let effects = tui.cancel_timers(|_| true);
    tui.chat.invalidate();
    tui.session.clear();
    tui.transcript.reset();
    if tui.session.active_tab() == Tab::History {
        tui.sidebar.refresh_history(&tui.session, tui.history_limit);
    } else {
        tui.sidebar.history.clear();
    }
    effects
}

fn request_export(tui: &mut TuiState) -> Vec<UiEffect> {
    let lines: Vec<_> = tui
        .transcript
        .export_lines()
        .into_iter()
        .map(|(speaker, text)| (speaker, text.to_string()))
        .collect();
    if lines.is_empty() {
        return tui.post_notice(NOTHING_TO_EXPORT);
    }
    vec![UiEffect::ExportTranscript {
        category: tui.session.active_category(),
        lines,
    }]
}

// ============================================================================
// Async results
// ============================================================================

fn handle_timer(tui: &mut TuiState, kind: TimerKind) -> Vec<UiEffect> {
    match kind {
        TimerKind::Greeting(category) => {
            tui.transcript.push(ChatCell::bot(category.greeting(), category));
            vec![]
        }
        TimerKind::SendRecommended(question) => {
            if !tui.can_send() {
                tracing::debug!(question, "delayed send skipped: request in flight");
                return vec![];
            }
            chat::submit_input(tui)
        }
        TimerKind::DismissNotice(cell) => {
            tui.transcript.remove(cell);
            vec![]
        }
    }
}

fn handle_health(tui: &mut TuiState, result: ApiResult<HealthStatus>) -> Vec<UiEffect> {
    match result {
        Ok(health) => {
            tracing::info!(model = health.model_name(), "backend healthy");
            tui.status_line.backend = BackendStatus::Connected;
            let mut effects =
                tui.post_notice(&format!("{BACKEND_CONNECTED_PREFIX}{}", health.model_name()));
            effects.push(UiEffect::LoadModelInfo { show: false });
            effects
        }
        Err(err) if err.kind == ApiErrorKind::HttpStatus => {
            tracing::warn!(error = %err, "backend not ready");
            tui.status_line.backend = BackendStatus::NotReady;
            tui.post_notice(BACKEND_NOT_READY)
        }
        Err(err) => {
            tracing::warn!(error = %err, "backend unreachable");
            tui.status_line.backend = BackendStatus::Starting;
            tui.post_notice(BACKEND_STARTING)
        }
    }
}

fn handle_model_info(tui: &mut TuiState, show: bool, result: ApiResult<ModelInfo>) -> Vec<UiEffect> {
    match result {
        Ok(info) => {
            let effects = if show {
                tui.post_notice(&info.describe())
            } else {
                vec![]
            };
            tui.status_line.model = Some(info);
            effects
        }
        Err(err) => {
            tracing::warn!(error = %err, "model info unavailable");
            if tui.status_line.model.is_none() {
                tui.status_line.model = Some(ModelInfo::offline());
            }
            if !show {
                return vec![];
            }
            let text = if err.kind == ApiErrorKind::HttpStatus {
                MODEL_INFO_UNAVAILABLE
            } else {
                MODEL_INFO_FAILED
            };
            tui.post_notice(text)
        }
    }
}

fn handle_recommendations(tui: &mut TuiState, result: ApiResult<RecommendReply>) {
    tui.sidebar.remote = match result {
        Ok(reply) => {
            tracing::debug!(count = reply.recommendations.len(), "remote recommendations loaded");
            RemoteRecommendations::Loaded(reply.recommendations)
        }
        Err(err) => {
            tracing::warn!(error = %err, "remote recommendations unavailable");
            RemoteRecommendations::Failed
        }
    };
    tui.sidebar.clamp(tui.session.active_tab());
}

#[cfg(test)]
mod tests {
    use nori_core::backend::{ApiError, ChatReply};
    use nori_core::config::Config;
    use nori_core::dispatch::UNREACHABLE_FALLBACK;

    use super::*;
    use crate::common::{RequestId, TimerId};

    fn app() -> AppState {
        AppState::new(&Config::default(), "http://localhost:8000")
    }

    fn key(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    #[test]
    fn test_page_up_past_top_does_not_delay_page_down() {
        let mut app = app();
        for i in 0..40 {
            app.tui.transcript.push(ChatCell::system(format!("line {i}")));
        }
        // 80 lines in a 25-row transcript leaves 55 to scroll.
        update(&mut app, UiEvent::Frame { width: 100, height: 30 });

        for _ in 0..10 {
            key(&mut app, KeyCode::PageUp);
        }
        assert_eq!(app.tui.transcript.scroll_from_bottom, 55);

        key(&mut app, KeyCode::PageDown);
        assert_eq!(app.tui.transcript.scroll_from_bottom, 45);
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    fn send(app: &mut AppState, text: &str) -> (RequestId, u64) {
        type_text(app, text);
        match key(app, KeyCode::Enter).as_slice() {
            [UiEffect::SendChat { id, epoch, .. }] => (*id, *epoch),
            other => panic!("expected SendChat, got {other:?}"),
        }
    }

    fn complete(app: &mut AppState, id: RequestId, epoch: u64, result: ApiResult<ChatReply>) {
        update(
            app,
            UiEvent::ChatCompleted {
                id,
                epoch,
                question: "q".to_string(),
                result,
            },
        );
    }

    fn timer_ids(effects: &[UiEffect]) -> Vec<TimerId> {
        effects
            .iter()
            .filter_map(|e| match e {
                UiEffect::StartTimer { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn confirm_clear(app: &mut AppState) -> Vec<UiEffect> {
        ctrl(app, 'l');
        assert!(matches!(app.overlay, Some(Overlay::ConfirmClear(_))));
        key(app, KeyCode::Char('y'))
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let mut app = app();
        type_text(&mut app, "   ");
        assert!(key(&mut app, KeyCode::Enter).is_empty());
        assert!(app.tui.transcript.is_empty());
    }

    #[test]
    fn test_health_category_scenario() {
        let mut app = app();
        let (id, epoch) = send(&mut app, "혈압 관리 방법 알려주세요");
        complete(
            &mut app,
            id,
            epoch,
            Ok(ChatReply {
                response: Some("혈압은 규칙적으로 측정하세요.".to_string()),
                category: Some("health".to_string()),
            }),
        );

        let cells = app.tui.transcript.cells();
        assert_eq!(cells.len(), 2);
        assert!(matches!(&cells[0], ChatCell::User { text, .. } if text == "혈압 관리 방법 알려주세요"));
        assert!(matches!(&cells[1], ChatCell::Bot { .. }));
        assert_eq!(app.tui.session.active_category(), Category::Health);
    }

    #[test]
    fn test_network_error_leaves_fallback_and_reenables_send() {
        let mut app = app();
        let (id, epoch) = send(&mut app, "안녕");
        complete(
            &mut app,
            id,
            epoch,
            Err(ApiError::new(ApiErrorKind::Connect, "refused")),
        );

        assert_eq!(
            app.tui.transcript.cells().last().and_then(ChatCell::text),
            Some(UNREACHABLE_FALLBACK)
        );
        assert!(app.tui.can_send());
        let (next, _) = send(&mut app, "다시");
        assert!(next > id);
    }

    #[test]
    fn test_response_after_clear_is_discarded() {
        let mut app = app();
        let (id, epoch) = send(&mut app, "느린 질문");
        confirm_clear(&mut app);
        assert!(app.tui.transcript.is_empty());
        assert!(app.tui.can_send());

        complete(
            &mut app,
            id,
            epoch,
            Ok(ChatReply {
                response: Some("늦은 답변".to_string()),
                category: Some("legal".to_string()),
            }),
        );

        assert!(app.tui.transcript.is_empty());
        assert!(app.tui.session.transcript().is_empty());
        assert_eq!(app.tui.session.active_category(), Category::Health);
    }

    #[test]
    fn test_clear_then_history_shows_empty_state() {
        let mut app = app();
        let (id, epoch) = send(&mut app, "질문");
        complete(
            &mut app,
            id,
            epoch,
            Ok(ChatReply {
                response: Some("답".to_string()),
                category: None,
            }),
        );
        assert_eq!(app.tui.session.transcript().len(), 1);

        confirm_clear(&mut app);
        sidebar::switch_tab(&mut app.tui, Tab::History);

        assert!(app.tui.sidebar.history.is_empty());
        assert!(app.tui.session.transcript().is_empty());
    }

    #[test]
    fn test_declined_clear_changes_nothing() {
        let mut app = app();
        let (id, epoch) = send(&mut app, "질문");
        complete(&mut app, id, epoch, Ok(ChatReply::default()));

        ctrl(&mut app, 'l');
        let effects = key(&mut app, KeyCode::Char('n'));

        assert!(effects.is_empty());
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.transcript.cells().len(), 2);
        assert_eq!(app.tui.session.transcript().len(), 1);
    }

    #[test]
    fn test_clear_cancels_timers_and_dismiss_after_clear_is_noop() {
        let mut app = app();
        let effects = sidebar::set_category(&mut app.tui, Category::Travel, false);
        let greeting = timer_ids(&effects)[0];
        let effects = app.tui.post_notice("🔄 알림");
        let dismiss = timer_ids(&effects)[0];

        let effects = confirm_clear(&mut app);
        assert_eq!(
            effects
                .iter()
                .filter(|e| matches!(e, UiEffect::CancelTimer { .. }))
                .count(),
            2
        );

        assert!(update(&mut app, UiEvent::TimerFired { id: greeting }).is_empty());
        assert!(update(&mut app, UiEvent::TimerFired { id: dismiss }).is_empty());
        assert!(app.tui.transcript.is_empty());
    }

    #[test]
    fn test_greeting_timer_posts_bot_message() {
        let mut app = app();
        let effects = sidebar::set_category(&mut app.tui, Category::Legal, false);
        let id = timer_ids(&effects)[0];
        update(&mut app, UiEvent::TimerFired { id });

        assert!(matches!(
            app.tui.transcript.cells(),
            [ChatCell::Bot { text, category: Category::Legal, .. }]
                if text == "안녕하세요! 법률 전문 AI가 기본 정보를 제공할게요!"
        ));
    }

    #[test]
    fn test_notice_dismisses_itself() {
        let mut app = app();
        let effects = app.tui.post_notice("💡 잠시만요");
        assert_eq!(app.tui.transcript.cells().len(), 1);

        update(&mut app, UiEvent::TimerFired { id: timer_ids(&effects)[0] });
        assert!(app.tui.transcript.is_empty());
    }

    #[test]
    fn test_recommended_send_fires_after_delay() {
        let mut app = app();
        let effects = sidebar::ask_recommended(&mut app.tui, Some(Category::Travel), "부산 맛집 추천");
        let send_timer = timer_ids(&effects)[1];

        let effects = update(&mut app, UiEvent::TimerFired { id: send_timer });
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SendChat { request, .. }]
                if request.message == "부산 맛집 추천" && request.category == Category::Travel
        ));
    }

    #[test]
    fn test_startup_probe_notices() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::HealthChecked {
                result: Ok(HealthStatus {
                    model: Some("qwen2.5".to_string()),
                    ..HealthStatus::default()
                }),
            },
        );
        assert!(effects.iter().any(|e| matches!(e, UiEffect::LoadModelInfo { show: false })));
        assert_eq!(
            app.tui.transcript.cells()[0].text(),
            Some("🟢 백엔드 서버 연결 성공! 모델: qwen2.5")
        );

        let mut app = self::app();
        update(
            &mut app,
            UiEvent::HealthChecked {
                result: Err(ApiError::http_status(503, "")),
            },
        );
        assert_eq!(app.tui.transcript.cells()[0].text(), Some(BACKEND_NOT_READY));
        assert_eq!(app.tui.status_line.backend, BackendStatus::NotReady);

        let mut app = self::app();
        update(
            &mut app,
            UiEvent::HealthChecked {
                result: Err(ApiError::new(ApiErrorKind::Connect, "refused")),
            },
        );
        assert_eq!(app.tui.transcript.cells()[0].text(), Some(BACKEND_STARTING));
    }

    #[test]
    fn test_model_info_failure_on_demand_posts_notice() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::ModelInfoLoaded {
                show: true,
                result: Err(ApiError::http_status(404, "")),
            },
        );
        assert_eq!(app.tui.transcript.cells()[0].text(), Some(MODEL_INFO_UNAVAILABLE));
        assert_eq!(
            app.tui.status_line.model.as_ref().map(ModelInfo::display_name),
            Some("Offline")
        );
    }

    #[test]
    fn test_export_with_empty_transcript_posts_notice() {
        let mut app = app();
        let effects = ctrl(&mut app, 's');
        assert!(!effects.iter().any(|e| matches!(e, UiEffect::ExportTranscript { .. })));
        assert_eq!(app.tui.transcript.cells()[0].text(), Some(NOTHING_TO_EXPORT));
    }

    #[test]
    fn test_slash_opens_palette_only_on_empty_input() {
        let mut app = app();
        key(&mut app, KeyCode::Char('/'));
        assert!(matches!(app.overlay, Some(Overlay::CommandPalette(_))));

        key(&mut app, KeyCode::Esc);
        type_text(&mut app, "a/b");
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.input.text(), "a/b");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        assert!(matches!(ctrl(&mut app, 'c').as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_sidebar_keys_switch_tabs() {
        let mut app = app();
        key(&mut app, KeyCode::Tab);
        assert_eq!(app.tui.focus, Focus::Sidebar);

        key(&mut app, KeyCode::Right);
        assert_eq!(app.tui.session.active_tab(), Tab::History);
        key(&mut app, KeyCode::Left);
        assert_eq!(app.tui.session.active_tab(), Tab::Categories);

        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.tui.session.active_category(), Category::Travel);
    }
}
