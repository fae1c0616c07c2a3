//! Transcript rendering.
//!
//! Cells are flattened to styled lines; the caller slices the visible window
//! according to `scroll_from_bottom`.

use nori_core::session::Category;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::cell::ChatCell;
use super::state::TranscriptState;
use crate::common::style::{MUTED_COLOR, NOTICE_COLOR, USER_COLOR, category_color, category_icon};
use crate::common::{sanitize_for_display, wrap_text};

const GUTTER: &str = "│ ";
const SPINNER_FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·", "   "];
const WELCOME_TITLE: &str = "새로운 대화를 시작하세요!";
const WELCOME_SUBTITLE: &str = "궁금한 것이 있으시면 언제든 물어보세요. 노리가 도와드릴게요!";

/// Flattens all cells into display lines of at most `width` columns.
pub fn transcript_lines(
    state: &TranscriptState,
    width: usize,
    spinner_frame: usize,
) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(GUTTER.width()).max(1);
    let mut lines = Vec::new();

    for cell in state.cells() {
        match cell {
            ChatCell::User { text, time, .. } => {
                let style = Style::default().fg(USER_COLOR);
                lines.push(Line::from(vec![
                    Span::styled("나", style.add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" · {time}"), Style::default().fg(MUTED_COLOR)),
                ]));
                push_body(&mut lines, text, body_width, style);
            }
            ChatCell::Bot {
                text,
                time,
                category,
                ..
            } => {
                let style = Style::default().fg(category_color(*category));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} 노리", category_icon(*category)),
                        style.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" · {time}"), Style::default().fg(MUTED_COLOR)),
                ]));
                push_body(&mut lines, text, body_width, Style::default());
            }
            ChatCell::System { text, .. } => {
                let style = Style::default()
                    .fg(NOTICE_COLOR)
                    .add_modifier(Modifier::ITALIC);
                for line in wrap_text(&sanitize_for_display(text), width.max(1)) {
                    lines.push(Line::from(Span::styled(line, style)));
                }
            }
            ChatCell::Typing { category, .. } => {
                let frame = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
                lines.push(Line::from(Span::styled(
                    format!("{} 노리가 답변을 준비하고 있어요 {frame}", category_icon(*category)),
                    Style::default().fg(category_color(*category)),
                )));
            }
        }
        lines.push(Line::default());
    }

    lines
}

fn push_body(lines: &mut Vec<Line<'static>>, text: &str, width: usize, text_style: Style) {
    let gutter_style = Style::default().fg(MUTED_COLOR);
    for line in wrap_text(&sanitize_for_display(text), width) {
        lines.push(Line::from(vec![
            Span::styled(GUTTER, gutter_style),
            Span::styled(line, text_style),
        ]));
    }
}

/// Renders the transcript, or the welcome card when it is empty.
pub fn render_transcript(
    frame: &mut Frame,
    area: Rect,
    state: &TranscriptState,
    category: Category,
    spinner_frame: usize,
) {
    if state.is_empty() {
        render_welcome(frame, area, category);
        return;
    }

    let lines = transcript_lines(state, area.width as usize, spinner_frame);
    let height = area.height as usize;
    let max_offset = lines.len().saturating_sub(height);
    let offset = state.scroll_from_bottom.min(max_offset);
    let end = lines.len() - offset;
    let start = end.saturating_sub(height);

    frame.render_widget(Paragraph::new(lines[start..end].to_vec()), area);
}

fn render_welcome(frame: &mut Frame, area: Rect, category: Category) {
    let accent = category_color(category);
    let lines = vec![
        Line::from(Span::raw(category_icon(category))),
        Line::default(),
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            WELCOME_SUBTITLE,
            Style::default().fg(MUTED_COLOR),
        )),
    ];
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect::new(area.x, area.y + top, area.width, area.height - top);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_user_and_bot_cells_render_header_and_body() {
        let mut state = TranscriptState::default();
        state.push(ChatCell::user("혈압 관리 방법 알려주세요"));
        state.push(ChatCell::bot("규칙적으로 측정하세요.", Category::Health));

        let lines: Vec<String> = transcript_lines(&state, 80, 0).iter().map(plain).collect();

        assert!(lines[0].starts_with("나 · "));
        assert_eq!(lines[1], "│ 혈압 관리 방법 알려주세요");
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("🏥 노리 · "));
        assert_eq!(lines[4], "│ 규칙적으로 측정하세요.");
    }

    #[test]
    fn test_body_fills_width_after_gutter() {
        let mut state = TranscriptState::default();
        state.push(ChatCell::user("abcdefghij"));

        let lines: Vec<String> = transcript_lines(&state, 12, 0).iter().map(plain).collect();

        assert_eq!(lines[1], "│ abcdefghij");
        assert_eq!(lines[1].width(), 12);
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_typing_cell_animates() {
        let mut state = TranscriptState::default();
        state.show_typing(Category::Travel);

        let a = plain(&transcript_lines(&state, 80, 0)[0]);
        let b = plain(&transcript_lines(&state, 80, 1)[0]);
        assert_ne!(a, b);
        assert!(a.contains("노리가 답변을 준비하고 있어요"));
    }
}
