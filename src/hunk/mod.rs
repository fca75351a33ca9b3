mod types;
pub use types::*;

use crate::lcs::{EditKind, EditOperation};

/// Number of unchanged tokens kept around each change.
pub const DEFAULT_CONTEXT: usize = 3;

struct HunkBuilder<'a, T> {
    script: &'a [EditOperation<T>],
    cursor: usize,
    old_line: usize,
    new_line: usize,
    hunks: Vec<Hunk<T>>,
}

impl<'a, T: Clone> HunkBuilder<'a, T> {
    fn new(script: &'a [EditOperation<T>]) -> Self {
        HunkBuilder {
            script,
            cursor: 0,
            old_line: 0,
            new_line: 0,
            hunks: vec![],
        }
    }

    fn advance_to(&mut self, index: usize) {
        for op in &self.script[self.cursor..index] {
            match op.kind {
                EditKind::Equal => {
                    self.old_line += 1;
                    self.new_line += 1;
                }
                EditKind::Delete => self.old_line += 1,
                EditKind::Insert => self.new_line += 1,
            }
        }
        self.cursor = index;
    }

    fn process(&mut self, start: usize, end: usize) {
        self.advance_to(start);
        let operations = self.script[start..end].to_vec();
        let old_len = operations
            .iter()
            .filter(|op| op.kind != EditKind::Insert)
            .count();
        let new_len = operations
            .iter()
            .filter(|op| op.kind != EditKind::Delete)
            .count();
        self.hunks.push(Hunk {
            old_start: range_start(self.old_line, old_len),
            old_len,
            new_start: range_start(self.new_line, new_len),
            new_len,
            operations,
        });
    }

    fn finish(self) -> Vec<Hunk<T>> {
        self.hunks
    }
}

fn range_start(lines_before: usize, len: usize) -> usize {
    if len == 0 {
        lines_before
    } else {
        lines_before + 1
    }
}

/// Groups the changes of `script` into hunks with `context` unchanged
/// operations on each side.
///
/// Changes separated by no more than `2 * context` unchanged operations share
/// a hunk, so context is never repeated across hunks.
pub fn hunks<T: Clone>(script: &[EditOperation<T>], context: usize) -> Vec<Hunk<T>> {
    let mut ranges: Vec<(usize, usize)> = vec![];
    for (index, _) in script.iter().enumerate().filter(|(_, op)| op.is_change()) {
        match ranges.last_mut() {
            Some((_, end)) if index - *end <= 2 * context => *end = index + 1,
            _ => ranges.push((index, index + 1)),
        }
    }

    let mut builder = HunkBuilder::new(script);
    for (start, end) in ranges {
        let start = start.saturating_sub(context);
        let end = (end + context).min(script.len());
        builder.process(start, end);
    }
    builder.finish()
}
