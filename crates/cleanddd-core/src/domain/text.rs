//! Plain-text presentation helpers shared by both workflows.

use std::path::{Path, PathBuf};

/// Line width used when reflowing explanatory paragraphs.
pub const WRAP_WIDTH: usize = 88;

/// Reflow a paragraph to [`WRAP_WIDTH`] characters.
pub fn wrap_text(text: &str) -> String {
    wrap_to(text, WRAP_WIDTH)
}

/// Greedy reflow to `width` characters.
///
/// Runs of whitespace collapse to single spaces. Words longer than `width`
/// are broken, which is what splits unspaced CJK text.
pub fn wrap_to(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        loop {
            let needed = if current_len == 0 {
                chars.len()
            } else {
                current_len + 1 + chars.len()
            };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(chars.iter());
                current_len += chars.len();
                break;
            }

            let room = if current_len == 0 {
                width
            } else {
                width.saturating_sub(current_len + 1)
            };
            if chars.len() > width && room > 0 {
                // Fill the rest of the line with the head of an overlong word.
                if current_len > 0 {
                    current.push(' ');
                }
                current.extend(chars.drain(..room));
            }
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            if chars.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// A title framed by `=` rules as wide as the title.
pub fn heading_lines(title: &str) -> [String; 3] {
    let rule = "=".repeat(title.chars().count());
    [rule.clone(), title.to_owned(), rule]
}

/// Expand a leading `~` to `home`.
///
/// Only `~` on its own or followed by a separator is expanded; `~user`
/// forms and paths without a leading tilde are returned unchanged.
pub fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };

    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
