//! Single-line message input.
//!
//! The cursor is tracked in grapheme clusters so Hangul jamo sequences and
//! emoji are edited as one unit.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default, Clone)]
pub struct InputState {
    text: String,
    /// Cursor position in graphemes.
    cursor: usize,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text.graphemes(true).take(self.cursor).map(UnicodeWidthStr::width).sum()
    }

    /// Replaces the whole text and moves the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.grapheme_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_str(&mut self, s: &str) {
        // Pasted newlines would submit half a message; flatten them.
        let s = s.replace(['\r', '\n'], " ");
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, &s);
        // Joiners and combining marks can merge with their neighbours, so
        // the cursor lands after the cluster holding the last inserted byte.
        let end = at + s.len();
        self.cursor = self
            .text
            .grapheme_indices(true)
            .take_while(|(i, _)| *i < end)
            .count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_len() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_len();
    }

    /// Deletes from the cursor back to the start of the previous word.
    pub fn delete_word_back(&mut self) {
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let mut start = self.cursor.min(graphemes.len());
        while start > 0 && graphemes[start - 1].trim().is_empty() {
            start -= 1;
        }
        while start > 0 && !graphemes[start - 1].trim().is_empty() {
            start -= 1;
        }
        let from = self.byte_offset(start);
        let to = self.byte_offset(self.cursor);
        self.text.replace_range(from..to, "");
        self.cursor = start;
    }

    fn grapheme_len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_offset(&self, grapheme: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
