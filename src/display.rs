//! Terminal presentation of rendered views.

use std::fmt::Write;

use mediascope_core::Session;

use crate::config::Settings;

/// Continuation lines keep at least this many columns for the value.
const MIN_VALUE_COLUMNS: usize = 10;

/// Output options taken from the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    pub word_wrap: bool,
    pub width: usize,
}

impl Display {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            word_wrap: settings.word_wrap,
            width: settings.wrap_width,
        }
    }

    /// Apply wrapping to a rendered view.
    pub fn format(&self, text: &str) -> String {
        if !self.word_wrap {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        for line in text.lines() {
            out.push_str(&wrap_line(line, self.width));
            out.push('\n');
        }
        out
    }

    /// Title line, tab bar and view for the session.
    pub fn screen(&self, session: &Session) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", session.title());

        let tabs: Vec<String> = session
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if c.key == session.active_category() {
                    format!("[{i}: {}]", c.caption)
                } else {
                    format!(" {i}: {} ", c.caption)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", tabs.join(" "));

        if !session.search().is_empty() {
            let _ = writeln!(out, "search: {}", session.search());
        }
        out.push('\n');
        out.push_str(&self.format(&session.render()));
        out
    }
}

/// Wrap one line to `width` columns.
///
/// Field rows (`name: value`) keep continuation lines aligned under the
/// value column. Words longer than a line are split.
fn wrap_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }

    let (head, body) = match line.find(": ") {
        Some(i) if line[..i + 2].chars().count() + MIN_VALUE_COLUMNS <= width => {
            line.split_at(i + 2)
        }
        _ => ("", line),
    };
    let indent = head.chars().count();

    let mut lines: Vec<String> = Vec::new();
    let mut current = head.to_string();
    let mut current_len = indent;
    let mut has_words = false;

    for word in body.split_whitespace() {
        let mut rest: Vec<char> = word.chars().collect();
        loop {
            let gap = usize::from(has_words);
            let room = width.saturating_sub(current_len + gap);
            if rest.len() <= room {
                if has_words {
                    current.push(' ');
                }
                current.extend(rest.iter());
                current_len += gap + rest.len();
                has_words = true;
                break;
            }
            if !has_words {
                current.extend(rest.drain(..room));
            }
            lines.push(std::mem::replace(&mut current, " ".repeat(indent)));
            current_len = indent;
            has_words = false;
        }
    }
    lines.push(current);
    lines.join("\n")
}
