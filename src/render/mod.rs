mod context;
mod html;
mod patch;
mod unified;

use crate::lcs::{EditKind, EditOperation};
use serde::{Deserialize, Serialize};

/// Presentation of an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// File headers, one summary hunk header, and only the changed tokens.
    #[default]
    Unified,
    /// Every operation, unchanged ones included.
    Context,
    /// Two-column HTML table.
    Html,
    /// Unified diff split into hunks with three tokens of context.
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_line_numbers: bool,
    pub left_label: String,
    pub right_label: String,
}

impl RenderOptions {
    pub fn new(format: OutputFormat) -> Self {
        RenderOptions {
            format,
            ..Default::default()
        }
    }

    pub fn with_line_numbers(mut self, show_line_numbers: bool) -> Self {
        self.show_line_numbers = show_line_numbers;
        self
    }

    pub fn with_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_label = left.into();
        self.right_label = right.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            format: OutputFormat::default(),
            show_line_numbers: false,
            left_label: "Text 1".to_string(),
            right_label: "Text 2".to_string(),
        }
    }
}

/// Renders `script` in the format selected by `options`.
pub fn render<T: AsRef<str> + Clone>(script: &[EditOperation<T>], options: &RenderOptions) -> String {
    match options.format {
        OutputFormat::Unified => unified::render(script, options),
        OutputFormat::Context => context::render(script, options),
        OutputFormat::Html => html::render(script, options),
        OutputFormat::Patch => patch::render(script, options),
    }
}

pub trait ToDiffLine {
    fn to_diff_line(&self, show_line_numbers: bool) -> String;
}

impl<T: AsRef<str>> ToDiffLine for EditOperation<T> {
    fn to_diff_line(&self, show_line_numbers: bool) -> String {
        let token = escape_token(self.token.as_ref());
        if show_line_numbers {
            let number = display_index(self).unwrap_or_default();
            format!("{}{:>4} {}", marker(self.kind), number, token)
        } else {
            format!("{}{}", marker(self.kind), token)
        }
    }
}

/// Keeps a token on one output line: `\\`, `\n` and `\r` become two-character escapes.
pub fn escape_token(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Inverse of [`escape_token`].
pub fn unescape_token(line: &str) -> String {
    let mut token = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            token.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => token.push('\n'),
            Some('r') => token.push('\r'),
            Some('\\') => token.push('\\'),
            Some(other) => {
                token.push('\\');
                token.push(other);
            }
            None => token.push('\\'),
        }
    }
    token
}

pub(crate) fn marker(kind: EditKind) -> char {
    match kind {
        EditKind::Equal => ' ',
        EditKind::Delete => '-',
        EditKind::Insert => '+',
    }
}

/// Position shown next to an operation: left side unless it only exists on the right.
pub(crate) fn display_index<T>(op: &EditOperation<T>) -> Option<usize> {
    match op.kind {
        EditKind::Equal | EditKind::Delete => op.source_index,
        EditKind::Insert => op.target_index,
    }
}

pub(crate) fn side_lengths<T>(script: &[EditOperation<T>]) -> (usize, usize) {
    script.iter().fold((0, 0), |(old, new), op| match op.kind {
        EditKind::Equal => (old + 1, new + 1),
        EditKind::Delete => (old + 1, new),
        EditKind::Insert => (old, new + 1),
    })
}
