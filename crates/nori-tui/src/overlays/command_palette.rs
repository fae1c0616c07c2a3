//! Command palette (Ctrl+O, or `/` on an empty input).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::{OverlayRequest, OverlayUpdate};
use crate::common::commands::{COMMANDS, Command};
use crate::mutations::StateMutation;

#[derive(Debug, Clone, Default)]
pub struct CommandPaletteState {
    pub filter: String,
    pub selected: usize,
}

impl CommandPaletteState {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                let count = self.filtered_commands().len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter | KeyCode::Tab => match self.selected_command() {
                Some(command) => execute_command(command),
                None => OverlayUpdate::close(),
            },
            KeyCode::Backspace => {
                self.filter.pop();
                self.clamp_selection();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.filter.push(c);
                self.clamp_selection();
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn filtered_commands(&self) -> Vec<&'static Command> {
        COMMANDS
            .iter()
            .filter(|cmd| self.filter.is_empty() || cmd.matches(&self.filter))
            .collect()
    }

    pub fn clamp_selection(&mut self) {
        let count = self.filtered_commands().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    fn selected_command(&self) -> Option<&'static Command> {
        self.filtered_commands().get(self.selected).copied()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let commands = self.filtered_commands();
        let hints = [
            InputHint::new("↑↓", "이동"),
            InputHint::new("Enter", "실행"),
            InputHint::new("Esc", "닫기"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "명령",
                border_color: Color::Magenta,
                width: 56,
                height: commands.len().max(1) as u16 + 5,
                hints: &hints,
            },
        );

        let filter_line = Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.filter.clone(), Style::default().fg(Color::Magenta)),
            Span::styled("█", Style::default().fg(Color::Magenta)),
        ]);
        let filter_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
        frame.render_widget(Paragraph::new(filter_line), filter_area);

        let list_area = Rect::new(
            layout.body.x,
            layout.body.y + 2,
            layout.body.width,
            layout.body.height.saturating_sub(2),
        );

        if commands.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  일치하는 명령이 없습니다",
                    Style::default().fg(Color::DarkGray),
                )),
                list_area,
            );
            return;
        }

        let name_width = commands
            .iter()
            .map(|c| c.display_name().len())
            .max()
            .unwrap_or(0);
        let items: Vec<ListItem> = commands
            .iter()
            .map(|cmd| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<name_width$}  ", cmd.display_name()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(cmd.description, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::Magenta))
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }
}

fn execute_command(command: &Command) -> OverlayUpdate {
    if let Some(category) = command.category() {
        return OverlayUpdate::close().with_mutations(vec![StateMutation::PickCategory(category)]);
    }
    let mutation = match command.name {
        "clear" => return OverlayUpdate::open(OverlayRequest::ConfirmClear),
        "export" => StateMutation::Export,
        "shuffle" => StateMutation::Shuffle,
        "model" => StateMutation::ShowModelInfo,
        "ping" => StateMutation::CheckHealth,
        "quit" => StateMutation::Quit,
        other => {
            tracing::warn!(command = other, "unhandled palette command");
            return OverlayUpdate::close();
        }
    };
    OverlayUpdate::close().with_mutations(vec![mutation])
}
