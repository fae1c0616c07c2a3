use nori_core::session::{Category, Session, Tab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs};

use super::state::{RemoteRecommendations, SidebarEntry, SidebarState};
use crate::common::style::{MUTED_COLOR, category_color, category_icon};
use crate::common::truncate_with_ellipsis;

/// Sidebar width in columns.
pub const SIDEBAR_WIDTH: u16 = 34;

const EMPTY_HISTORY: &str = "아직 대화 기록이 없습니다.";
const REMOTE_GROUP: &str = "✨ 맞춤 추천";

pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    sidebar: &SidebarState,
    focused: bool,
) {
    let accent = category_color(session.active_category());
    let border = if focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(MUTED_COLOR)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);

    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
    let tabs = Tabs::new(titles)
        .select(Tab::ALL.iter().position(|t| *t == session.active_tab()))
        .style(Style::default().fg(MUTED_COLOR))
        .highlight_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .divider("│");
    frame.render_widget(tabs, tabs_area);

    let width = list_area.width.saturating_sub(2) as usize;
    let tab = session.active_tab();

    if tab == Tab::History && sidebar.history.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                EMPTY_HISTORY,
                Style::default().fg(MUTED_COLOR),
            )))
            .centered(),
            list_area,
        );
        return;
    }

    let mut items = Vec::new();
    let mut selected_row = None;
    let mut last_group: Option<Option<Category>> = None;

    for (index, entry) in sidebar.entries(tab).into_iter().enumerate() {
        if let SidebarEntry::Recommended { category, .. } = entry
            && last_group != Some(category)
        {
            last_group = Some(category);
            items.push(group_header(category));
        }
        if index == sidebar.selected {
            selected_row = Some(items.len());
        }
        items.push(entry_item(entry, session, width));
    }

    if tab == Tab::Recommendations {
        match sidebar.remote {
            RemoteRecommendations::Loading => items.push(ListItem::new(Line::from(Span::styled(
                "맞춤 추천을 불러오는 중...",
                Style::default().fg(MUTED_COLOR),
            )))),
            RemoteRecommendations::Failed => items.push(ListItem::new(Line::from(Span::styled(
                "맞춤 추천을 불러오지 못했습니다.",
                Style::default().fg(MUTED_COLOR),
            )))),
            _ => {}
        }
    }

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(selected_row);
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn group_header(category: Option<Category>) -> ListItem<'static> {
    let line = match category {
        Some(category) => Line::from(Span::styled(
            format!("{} {}", category_icon(category), category.title()),
            Style::default()
                .fg(category_color(category))
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            REMOTE_GROUP,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    };
    ListItem::new(line)
}

fn entry_item(entry: SidebarEntry<'_>, session: &Session, width: usize) -> ListItem<'static> {
    match entry {
        SidebarEntry::Category(category) => {
            let active = category == session.active_category();
            let marker = if active { "● " } else { "  " };
            let color = category_color(category);
            let mut title = Style::default().fg(color);
            if active {
                title = title.add_modifier(Modifier::BOLD);
            }
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(color)),
                    Span::styled(
                        format!("{} {}", category_icon(category), category.title()),
                        title,
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", truncate_with_ellipsis(category.info().subtitle, width.saturating_sub(2))),
                    Style::default().fg(MUTED_COLOR),
                )),
            ])
        }
        SidebarEntry::History(exchange) => {
            let color = exchange
                .category()
                .map_or(MUTED_COLOR, category_color);
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_with_ellipsis(&exchange.question, width),
                    Style::default().fg(color),
                )),
                Line::from(Span::styled(
                    format!("  {} • {}", exchange.category_label, exchange.timestamp),
                    Style::default().fg(MUTED_COLOR),
                )),
            ])
        }
        SidebarEntry::Recommended {
            question,
            description,
            ..
        } => {
            let mut lines = vec![Line::from(Span::raw(format!(
                "  {}",
                truncate_with_ellipsis(question, width.saturating_sub(2))
            )))];
            if let Some(description) = description {
                lines.push(Line::from(Span::styled(
                    format!("    {}", truncate_with_ellipsis(description, width.saturating_sub(4))),
                    Style::default().fg(MUTED_COLOR),
                )));
            }
            ListItem::new(lines)
        }
    }
}
