use nori_core::session::Category;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::state::InputState;
use crate::common::style::{MUTED_COLOR, category_color};

/// Rows taken by the input box including borders.
pub const INPUT_HEIGHT: u16 = 3;

pub struct InputView<'a> {
    pub input: &'a InputState,
    pub category: Category,
    pub sending: bool,
    pub focused: bool,
}

pub fn render_input(frame: &mut Frame, area: Rect, view: &InputView<'_>) {
    let accent = category_color(view.category);
    let border_style = if view.focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(MUTED_COLOR)
    };
    let title = if view.sending {
        " 응답을 기다리는 중... "
    } else {
        " 메시지 (Enter 전송) "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, border_style.add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.input.is_empty() {
        let placeholder = format!("{}에 대해 궁금한 점을 입력하세요...", view.category.title());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                placeholder,
                Style::default().fg(MUTED_COLOR),
            ))),
            inner,
        );
        if view.focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let (visible, cursor_col) = visible_window(view.input, inner.width as usize);
    frame.render_widget(Paragraph::new(Line::from(visible)), inner);
    if view.focused {
        frame.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
    }
}

/// Slice of the input that keeps the cursor on screen, with the cursor column.
fn visible_window(input: &InputState, width: usize) -> (String, usize) {
    let width = width.max(1);
    let cursor_col = input.cursor_column();
    let skip_cols = (cursor_col + 1).saturating_sub(width);

    let mut skipped = 0;
    let mut used = 0;
    let mut out = String::new();
    for g in input.text().graphemes(true) {
        let w = g.width();
        if skipped < skip_cols {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        used += w;
        out.push_str(g);
    }
    (out, cursor_col - skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_short_text() {
        let mut input = InputState::default();
        input.set_text("hello");
        assert_eq!(visible_window(&input, 20), ("hello".to_string(), 5));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let mut input = InputState::default();
        input.set_text("abcdefghij");
        let (text, col) = visible_window(&input, 5);
        assert_eq!(text, "ghij");
        assert_eq!(col, 4);
    }
}
