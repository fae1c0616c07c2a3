//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::style::{MUTED_COLOR, category_color, category_icon};
use crate::input::{INPUT_HEIGHT, InputView, render_input};
use crate::overlays::OverlayExt;
use crate::sidebar::{SIDEBAR_WIDTH, render_sidebar};
use crate::state::{AppState, Focus};
use crate::statusline::render_status_line;
use crate::transcript::render_transcript;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Below this width the sidebar is hidden.
const MIN_WIDTH_FOR_SIDEBAR: u16 = 72;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    /// `None` on narrow terminals.
    pub sidebar: Option<Rect>,
    pub transcript: Rect,
    pub input: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let show_sidebar = rows[1].width >= MIN_WIDTH_FOR_SIDEBAR;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(if show_sidebar { SIDEBAR_WIDTH } else { 0 }),
                Constraint::Min(1),
            ])
            .split(rows[1]);

        let chat_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(INPUT_HEIGHT)])
            .split(columns[1]);

        Self {
            header: rows[0],
            sidebar: show_sidebar.then_some(columns[0]),
            transcript: chat_rows[0],
            input: chat_rows[1],
            status: rows[2],
        }
    }
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let layout = ScreenLayout::new(area);

    render_header(app, frame, layout.header);

    if let Some(sidebar_area) = layout.sidebar {
        render_sidebar(
            frame,
            sidebar_area,
            &state.session,
            &state.sidebar,
            state.focus == Focus::Sidebar && app.overlay.is_none(),
        );
    }

    let category = state.session.active_category();
    render_transcript(
        frame,
        layout.transcript,
        &state.transcript,
        category,
        state.spinner_frame,
    );
    render_input(
        frame,
        layout.input,
        &InputView {
            input: &state.input,
            category,
            sending: !state.can_send(),
            focused: state.focus == Focus::Input && app.overlay.is_none(),
        },
    );

    render_status_line(frame, layout.status, &state.status_line);

    app.overlay.render(frame, area);
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let category = app.tui.session.active_category();
    let accent = category_color(category);
    let line = Line::from(vec![
        Span::styled(
            " Nori ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(MUTED_COLOR)),
        Span::raw(format!("{} ", category_icon(category))),
        Span::styled(
            category.title(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", category.info().subtitle),
            Style::default().fg(MUTED_COLOR),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use nori_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::overlays::{Overlay, OverlayRequest};

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_header_and_status() {
        let app = AppState::new(&Config::default(), "http://localhost:8000");
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Nori"));
        assert!(screen.contains("localhost:8000"));
    }

    #[test]
    fn test_sidebar_hidden_on_narrow_terminal() {
        let wide = ScreenLayout::new(Rect::new(0, 0, 100, 30));
        assert!(wide.sidebar.is_some());
        assert_eq!(wide.transcript.width, 100 - SIDEBAR_WIDTH);

        let narrow = ScreenLayout::new(Rect::new(0, 0, 60, 30));
        assert!(narrow.sidebar.is_none());
        assert_eq!(narrow.transcript.width, 60);
        assert_eq!(narrow.transcript.height, 30 - 2 - INPUT_HEIGHT);
    }

    #[test]
    fn test_renders_on_tiny_terminal_with_overlay() {
        let mut app = AppState::new(&Config::default(), "http://localhost:8000");
        app.overlay = Some(Overlay::open(OverlayRequest::CommandPalette));
        draw(&app, 20, 6);
    }
}
