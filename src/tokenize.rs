use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// How source text is broken into tokens before diffing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// One token per `\n`-separated line, untrimmed.
    #[default]
    Line,
    /// Words and whitespace runs as separate tokens.
    Word,
}

/// An immutable sequence of tokens taken from one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(text: &str, mode: SplitMode) -> Self {
        let tokens = match mode {
            SplitMode::Line => split_lines(text),
            SplitMode::Word => split_words(text),
        };
        TokenSequence { tokens }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// can't use `.lines()`: it swallows a trailing empty line and strips `\r`
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(ToString::to_string).collect()
}

fn split_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for run in WHITESPACE_RUN.find_iter(text) {
        if run.start() > last {
            tokens.push(text[last..run.start()].to_string());
        }
        tokens.push(run.as_str().to_string());
        last = run.end();
    }
    if last < text.len() {
        tokens.push(text[last..].to_string());
    }
    tokens
}
