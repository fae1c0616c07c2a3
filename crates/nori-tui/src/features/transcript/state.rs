//! Chat view state: the display cells and the scroll position.

use nori_core::export::Speaker;
use nori_core::session::Category;

use super::cell::{CellId, ChatCell};

/// Lines moved per PageUp/PageDown.
pub const PAGE_SCROLL_LINES: usize = 10;

#[derive(Debug, Default)]
pub struct TranscriptState {
    cells: Vec<ChatCell>,
    /// Lines scrolled up from the bottom; 0 follows the latest message.
    pub scroll_from_bottom: usize,
    /// Furthest `scroll_from_bottom` can go, refreshed every frame.
    max_scroll: usize,
}

impl TranscriptState {
    pub fn cells(&self) -> &[ChatCell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn push(&mut self, cell: ChatCell) -> CellId {
        let id = cell.id();
        self.cells.push(cell);
        self.scroll_from_bottom = 0;
        id
    }

    /// Shows the typing indicator. At most one exists at a time.
    pub fn show_typing(&mut self, category: Category) {
        self.hide_typing();
        self.push(ChatCell::typing(category));
    }

    pub fn hide_typing(&mut self) {
        self.cells.retain(|cell| !cell.is_typing());
    }

    pub fn has_typing(&self) -> bool {
        self.cells.iter().any(ChatCell::is_typing)
    }

    /// Posts a system notice unless an equivalent one is already showing.
    ///
    /// Returns the new cell's id, or `None` for a duplicate.
    pub fn post_notice(&mut self, text: &str) -> Option<CellId> {
        let key = notice_key(text);
        let duplicate = self.cells.iter().any(|cell| match cell {
            ChatCell::System { text, .. } => text.contains(key),
            _ => false,
        });
        if duplicate {
            tracing::debug!(notice = text, "duplicate notice suppressed");
            return None;
        }
        Some(self.push(ChatCell::system(text)))
    }

    /// Removes a cell. Returns false when it was already gone.
    pub fn remove(&mut self, id: CellId) -> bool {
        let before = self.cells.len();
        self.cells.retain(|cell| cell.id() != id);
        self.cells.len() != before
    }

    /// Back to the empty welcome view.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.scroll_from_bottom = 0;
    }

    /// Records the rendered line count and viewport height.
    pub fn update_layout(&mut self, total_lines: usize, viewport_height: usize) {
        self.max_scroll = total_lines.saturating_sub(viewport_height);
        self.scroll_from_bottom = self.scroll_from_bottom.min(self.max_scroll);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_from_bottom = self
            .scroll_from_bottom
            .saturating_add(lines)
            .min(self.max_scroll);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    /// User and bot lines in display order, for export.
    pub fn export_lines(&self) -> Vec<(Speaker, &str)> {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                ChatCell::User { text, .. } => Some((Speaker::User, text.as_str())),
                ChatCell::Bot { text, .. } => Some((Speaker::Bot, text.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// Notice text with its leading status emoji removed, used for duplicate checks.
fn notice_key(text: &str) -> &str {
    text.trim_start_matches(['🔄', '💡', '❌', ' ']).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_indicator_is_unique() {
        let mut state = TranscriptState::default();
        state.show_typing(Category::Health);
        state.show_typing(Category::Health);
        assert_eq!(state.cells().len(), 1);

        state.hide_typing();
        assert!(!state.has_typing());
    }

    #[test]
    fn test_duplicate_notice_is_suppressed() {
        let mut state = TranscriptState::default();
        assert!(state.post_notice("🔄 여행 상담 카테고리로 전환했습니다.").is_some());
        assert!(state.post_notice("🔄 여행 상담 카테고리로 전환했습니다.").is_none());
        assert!(state.post_notice("여행 상담 카테고리로 전환했습니다.").is_none());
        assert!(state.post_notice("🔄 법률 상담 카테고리로 전환했습니다.").is_some());
        assert_eq!(state.cells().len(), 2);
    }

    #[test]
    fn test_remove_missing_cell_is_noop() {
        let mut state = TranscriptState::default();
        let id = state.post_notice("hello").unwrap();
        assert!(state.remove(id));
        assert!(!state.remove(id));
    }

    #[test]
    fn test_export_lines_skip_notices() {
        let mut state = TranscriptState::default();
        state.push(ChatCell::user("질문"));
        state.post_notice("notice");
        state.push(ChatCell::bot("답변", Category::Legal));

        assert_eq!(
            state.export_lines(),
            vec![(Speaker::User, "질문"), (Speaker::Bot, "답변")]
        );
    }

    #[test]
    fn test_scroll_stops_at_top() {
        let mut state = TranscriptState::default();
        state.update_layout(30, 20);

        for _ in 0..5 {
            state.scroll_up(PAGE_SCROLL_LINES);
        }
        assert_eq!(state.scroll_from_bottom, 10);

        state.scroll_down(PAGE_SCROLL_LINES);
        assert_eq!(state.scroll_from_bottom, 0);
    }

    #[test]
    fn test_shrinking_content_clamps_scroll() {
        let mut state = TranscriptState::default();
        state.update_layout(100, 20);
        state.scroll_up(50);

        state.update_layout(40, 20);
        assert_eq!(state.scroll_from_bottom, 20);
    }

    #[test]
    fn test_push_follows_latest() {
        let mut state = TranscriptState::default();
        state.update_layout(50, 10);
        state.scroll_up(5);
        state.push(ChatCell::user("hi"));
        assert_eq!(state.scroll_from_bottom, 0);
    }
}
