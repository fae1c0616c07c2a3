//! Width-aware text helpers for the renderer.
//!
//! Hangul and emoji occupy two terminal columns, so every measurement here
//! goes through `unicode-width`.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` columns, ending with `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Strips escape bytes and expands tabs in text that came off the wire.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    if s.contains('\x1b') || s.contains('\t') {
        Cow::Owned(s.replace('\x1b', "").replace('\t', "    "))
    } else {
        Cow::Borrowed(s)
    }
}

/// Wraps `text` into lines no wider than `width` columns.
///
/// Breaks at spaces when possible and mid-word otherwise (Korean text often
/// has long runs without spaces). Explicit newlines are kept; blank lines
/// survive as empty strings.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            out.push(String::new());
            continue;
        }

        let mut line = String::new();
        let mut line_width = 0;
        for word in raw_line.split_inclusive(' ') {
            let word_width = word.trim_end().width();
            if line_width + word_width > width && !line.is_empty() {
                out.push(line.trim_end().to_string());
                line.clear();
                line_width = 0;
            }
            if word_width > width {
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if line_width + w > width && !line.is_empty() {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += w;
                }
            } else {
                line.push_str(word);
                line_width += word.width();
            }
        }
        out.push(line.trim_end().to_string());
    }

    out
}
