use nori_core::backend::ModelHealth;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{BackendStatus, StatusLine};
use crate::common::style::MUTED_COLOR;
use crate::common::truncate_with_ellipsis;

const KEY_HINTS: &str = "Ctrl+O 명령 · Tab 이동 · Ctrl+L 초기화 · Ctrl+C 종료";

pub fn render_status_line(frame: &mut Frame, area: Rect, status: &StatusLine) {
    let dot_color = match status.backend {
        BackendStatus::Connected => match status.model.as_ref().map(|m| m.health()) {
            Some(ModelHealth::Mock) => Color::Yellow,
            Some(ModelHealth::Error) => Color::Red,
            _ => Color::Green,
        },
        BackendStatus::Checking => MUTED_COLOR,
        BackendStatus::NotReady => Color::Yellow,
        BackendStatus::Starting => Color::Red,
    };
    let sep = Span::styled(" │ ", Style::default().fg(MUTED_COLOR));

    let left = format!(
        "{} · {}",
        status.backend.label(),
        status.model_summary()
    );
    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::raw(truncate_with_ellipsis(&left, (area.width / 2) as usize)),
        sep.clone(),
        Span::styled(status.backend_url.clone(), Style::default().fg(MUTED_COLOR)),
        sep,
        Span::styled(KEY_HINTS, Style::default().fg(MUTED_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
