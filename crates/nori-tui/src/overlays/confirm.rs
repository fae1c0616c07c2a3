//! Blocking yes/no prompt for clearing the conversation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::mutations::StateMutation;

pub const CLEAR_PROMPT: &str = "대화를 모두 삭제하시겠습니까?";

#[derive(Debug, Clone, Default)]
pub struct ConfirmClearState;

impl ConfirmClearState {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                OverlayUpdate::close().with_mutations(vec![StateMutation::ClearConversation])
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("y/Enter", "삭제"),
            InputHint::new("n/Esc", "취소"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "대화 초기화",
                border_color: Color::Red,
                width: 44,
                height: 5,
                hints: &hints,
            },
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                CLEAR_PROMPT,
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            layout.body,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_yes_confirms_clear() {
        let update = ConfirmClearState.handle_key(key(KeyCode::Char('y')));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(update.mutations, vec![StateMutation::ClearConversation]);
    }

    #[test]
    fn test_no_and_escape_decline() {
        for code in [KeyCode::Char('n'), KeyCode::Esc] {
            let update = ConfirmClearState.handle_key(key(code));
            assert!(matches!(update.transition, OverlayTransition::Close));
            assert!(update.mutations.is_empty());
        }
    }

    #[test]
    fn test_other_keys_keep_prompt_open() {
        let update = ConfirmClearState.handle_key(key(KeyCode::Char('x')));
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }
}
