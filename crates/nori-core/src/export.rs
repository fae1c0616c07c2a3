//! Plain-text export of the visible conversation.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::session::Category;

/// Who said a line in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    fn label(self) -> &'static str {
        match self {
            Speaker::User => "사용자",
            Speaker::Bot => "AI",
        }
    }
}

/// Same-day exports beyond this many fail instead of probing further.
const MAX_SAME_DAY_EXPORTS: usize = 1000;

/// File name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    numbered_file_name(date, 0)
}

/// `n`-th same-day file name: `..._2025-03-09.txt`, `..._2025-03-09 (1).txt`, ...
fn numbered_file_name(date: NaiveDate, n: usize) -> String {
    let day = date.format("%Y-%m-%d");
    if n == 0 {
        format!("AI놀이터_대화내역_{day}.txt")
    } else {
        format!("AI놀이터_대화내역_{day} ({n}).txt")
    }
}

/// Renders the export document.
pub fn render_export(date: NaiveDate, category: Category, lines: &[(Speaker, &str)]) -> String {
    let mut out = format!(
        "AI 놀이터 대화 내역\n날짜: {}\n카테고리: {}\n\n",
        date.format("%Y-%m-%d"),
        category.title()
    );
    for (speaker, text) in lines {
        out.push_str(speaker.label());
        out.push_str(": ");
        out.push_str(text.trim());
        out.push_str("\n\n");
    }
    out
}

/// Writes an export for today into `dir` and returns the file path.
///
/// An existing export from the same day is kept; the new file gets a
/// ` (n)` suffix.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_export(dir: &Path, category: Category, lines: &[(Speaker, &str)]) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    write_export_on(dir, today, category, lines)
}

fn write_export_on(
    dir: &Path,
    date: NaiveDate,
    category: Category,
    lines: &[(Speaker, &str)],
) -> Result<PathBuf> {
    let contents = render_export(date, category, lines);

    for n in 0..MAX_SAME_DAY_EXPORTS {
        let path = dir.join(numbered_file_name(date, n));
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create export {}", path.display()));
            }
        };
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        tracing::info!(path = %path.display(), lines = lines.len(), "conversation exported");
        return Ok(path);
    }

    bail!(
        "Too many exports for {} in {}",
        date.format("%Y-%m-%d"),
        dir.display()
    )
}
