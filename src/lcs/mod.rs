pub mod types;
pub use types::*;

use crate::tokenize::{SplitMode, TokenSequence};
use std::cmp::max;

/// Suffix LCS lengths: `get(i, j)` is the LCS length of `old[i..]` and `new[j..]`.
struct Table {
    data: Vec<usize>,
    width: usize,
}

impl Table {
    fn new(rows: usize, cols: usize) -> Self {
        Table {
            data: vec![0; rows * cols],
            width: cols,
        }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.width + j]
    }

    fn set(&mut self, i: usize, j: usize, val: usize) {
        self.data[i * self.width + j] = val;
    }
}

/// Computes the diff between two strings after splitting them with `mode`.
pub fn diff_text(old: &str, new: &str, mode: SplitMode) -> EditScript<String> {
    diff_tokens(&TokenSequence::new(old, mode), &TokenSequence::new(new, mode))
}

/// Computes the diff between two token sequences.
pub fn diff_tokens(old: &TokenSequence, new: &TokenSequence) -> EditScript<String> {
    diff(old.as_slice(), new.as_slice())
}

/// Computes the diff between two sequences along a longest common subsequence.
///
/// A token that matches at the current position of both sides always emits
/// `Equal`. Otherwise, where several alignments share the same LCS length,
/// deletions from `old` are emitted before insertions from `new`, so
/// `[a, b]` against `[b, a]` gives `Delete a, Equal b, Insert a`.
///
/// # Examples
///
/// ```
/// use textdiff::lcs::{diff, EditKind};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "x", "c"];
/// let kinds: Vec<EditKind> = diff(&old, &new).iter().map(|op| op.kind).collect();
/// assert_eq!(kinds, vec![
///     EditKind::Equal,
///     EditKind::Delete,
///     EditKind::Insert,
///     EditKind::Equal,
/// ]);
/// ```
///
/// # Arguments
///
/// * `old` - The original (left) sequence
/// * `new` - The modified (right) sequence
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    let mut script = Vec::with_capacity(max(old.len(), new.len()));

    // A shared prefix is matched by the walk anyway; skipping it keeps the table small.
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    for (i, token) in old[..prefix].iter().enumerate() {
        script.push(EditOperation::equal(token.clone(), i + 1, i + 1));
    }

    let old_rest = &old[prefix..];
    let new_rest = &new[prefix..];
    if old_rest.is_empty() || new_rest.is_empty() {
        push_remaining(old_rest, new_rest, prefix, prefix, &mut script);
        return script;
    }

    let table = lcs_table(old_rest, new_rest);
    walk(old_rest, new_rest, &table, prefix, &mut script);
    script
}

fn lcs_table<T: Eq>(old: &[T], new: &[T]) -> Table {
    let n = old.len();
    let m = new.len();
    let mut table = Table::new(n + 1, m + 1);
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            let val = if old[i] == new[j] {
                table.get(i + 1, j + 1) + 1
            } else {
                max(table.get(i + 1, j), table.get(i, j + 1))
            };
            table.set(i, j, val);
        }
    }
    table
}

fn walk<T: Eq + Clone>(
    old: &[T],
    new: &[T],
    table: &Table,
    offset: usize,
    script: &mut EditScript<T>,
) {
    let mut i = 0;
    let mut j = 0;
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            script.push(EditOperation::equal(old[i].clone(), offset + i + 1, offset + j + 1));
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) >= table.get(i, j + 1) {
            script.push(EditOperation::delete(old[i].clone(), offset + i + 1));
            i += 1;
        } else {
            script.push(EditOperation::insert(new[j].clone(), offset + j + 1));
            j += 1;
        }
    }
    push_remaining(&old[i..], &new[j..], offset + i, offset + j, script);
}

fn push_remaining<T: Clone>(
    old: &[T],
    new: &[T],
    old_offset: usize,
    new_offset: usize,
    script: &mut EditScript<T>,
) {
    for (i, token) in old.iter().enumerate() {
        script.push(EditOperation::delete(token.clone(), old_offset + i + 1));
    }
    for (j, token) in new.iter().enumerate() {
        script.push(EditOperation::insert(token.clone(), new_offset + j + 1));
    }
}

/// Counts inserted, deleted and unchanged operations.
pub fn summarize<T>(script: &[EditOperation<T>]) -> DiffSummary {
    script
        .iter()
        .fold(DiffSummary::default(), |mut summary, op| {
            match op.kind {
                EditKind::Insert => summary.added += 1,
                EditKind::Delete => summary.removed += 1,
                EditKind::Equal => summary.unchanged += 1,
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds<T>(script: &[EditOperation<T>]) -> Vec<(EditKind, &T)> {
        script.iter().map(|op| (op.kind, &op.token)).collect()
    }

    fn left_of<T: Clone>(script: &[EditOperation<T>]) -> Vec<T> {
        script
            .iter()
            .filter(|op| op.kind != EditKind::Insert)
            .map(|op| op.token.clone())
            .collect()
    }

    fn right_of<T: Clone>(script: &[EditOperation<T>]) -> Vec<T> {
        script
            .iter()
            .filter(|op| op.kind != EditKind::Delete)
            .map(|op| op.token.clone())
            .collect()
    }

    proptest! {
        #[test]
        fn test_reconstruction(
            old in prop::collection::vec(0u8..4, 0..40),
            new in prop::collection::vec(0u8..4, 0..40),
        ) {
            let result = diff(&old, &new);
            prop_assert_eq!(left_of(&result), old);
            prop_assert_eq!(right_of(&result), new);
        }

        #[test]
        fn test_indices_follow_positions(
            old in prop::collection::vec(0u8..4, 0..40),
            new in prop::collection::vec(0u8..4, 0..40),
        ) {
            let result = diff(&old, &new);
            let sources: Vec<usize> = result.iter().filter_map(|op| op.source_index).collect();
            let targets: Vec<usize> = result.iter().filter_map(|op| op.target_index).collect();
            prop_assert_eq!(sources, (1..=old.len()).collect::<Vec<_>>());
            prop_assert_eq!(targets, (1..=new.len()).collect::<Vec<_>>());
            for op in &result {
                match op.kind {
                    EditKind::Equal => {
                        prop_assert!(op.source_index.is_some() && op.target_index.is_some())
                    }
                    EditKind::Delete => {
                        prop_assert!(op.target_index.is_none())
                    }
                    EditKind::Insert => {
                        prop_assert!(op.source_index.is_none())
                    }
                }
            }
        }

        #[test]
        fn test_idempotency(els: Vec<u8>) {
            let result = diff(&els, &els);
            let expected: EditScript<u8> = els
                .iter()
                .enumerate()
                .map(|(i, e)| EditOperation::equal(*e, i + 1, i + 1))
                .collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_new_empty(els: Vec<u8>) {
            let result = diff(&els, &Vec::new());
            let expected: EditScript<u8> = els
                .iter()
                .enumerate()
                .map(|(i, e)| EditOperation::delete(*e, i + 1))
                .collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_old_empty(els: Vec<u8>) {
            let result = diff(&Vec::new(), &els);
            let expected: EditScript<u8> = els
                .iter()
                .enumerate()
                .map(|(i, e)| EditOperation::insert(*e, i + 1))
                .collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_symmetry(
            old in prop::collection::vec(0u8..4, 0..40),
            new in prop::collection::vec(0u8..4, 0..40),
        ) {
            let forward = summarize(&diff(&old, &new));
            let backward = summarize(&diff(&new, &old));
            prop_assert_eq!(forward.unchanged, backward.unchanged);
            prop_assert_eq!(forward.added, backward.removed);
            prop_assert_eq!(forward.removed, backward.added);
        }

        #[test]
        fn test_deterministic(
            old in prop::collection::vec(0u8..4, 0..40),
            new in prop::collection::vec(0u8..4, 0..40),
        ) {
            prop_assert_eq!(diff(&old, &new), diff(&old, &new));
        }
    }

    #[test]
    fn test_both_empty() {
        let result = diff::<&str>(&[], &[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_simple_diff() {
        let old = vec!["a", "b", "c"];
        let new = vec!["a", "x", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                EditOperation::equal("a", 1, 1),
                EditOperation::delete("b", 2),
                EditOperation::insert("x", 2),
                EditOperation::equal("c", 3, 3),
            ]
        );
    }

    #[test]
    fn test_completely_different() {
        let old = vec!["a", "b"];
        let new = vec!["c", "d"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                EditOperation::delete("a", 1),
                EditOperation::delete("b", 2),
                EditOperation::insert("c", 1),
                EditOperation::insert("d", 2),
            ]
        );
    }

    #[test]
    fn test_single_element_different() {
        let result = diff(&["a"], &["b"]);
        assert_eq!(
            kinds(&result),
            vec![(EditKind::Delete, &"a"), (EditKind::Insert, &"b")]
        );
    }

    #[test]
    fn test_duplicates() {
        let old = vec!["a", "a", "b"];
        let new = vec!["a", "b", "b"];
        let result = diff(&old, &new);
        assert_eq!(
            kinds(&result),
            vec![
                (EditKind::Equal, &"a"),
                (EditKind::Delete, &"a"),
                (EditKind::Equal, &"b"),
                (EditKind::Insert, &"b"),
            ]
        );
    }

    #[test]
    fn test_swap_prefers_delete() {
        // both [a] and [b] are longest common subsequences here
        let result = diff(&["a", "b"], &["b", "a"]);
        assert_eq!(
            result,
            vec![
                EditOperation::delete("a", 1),
                EditOperation::equal("b", 2, 1),
                EditOperation::insert("a", 2),
            ]
        );
    }

    #[test]
    fn test_insertion_in_middle() {
        let old = vec!["a", "c"];
        let new = vec!["a", "b", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                EditOperation::equal("a", 1, 1),
                EditOperation::insert("b", 2),
                EditOperation::equal("c", 2, 3),
            ]
        );
    }

    #[test]
    fn test_finds_longest_subsequence() {
        let old = vec!["x", "a", "b", "c", "y"];
        let new = vec!["a", "z", "b", "c"];
        let result = diff(&old, &new);
        assert_eq!(summarize(&result).unchanged, 3);
        assert_eq!(
            kinds(&result),
            vec![
                (EditKind::Delete, &"x"),
                (EditKind::Equal, &"a"),
                (EditKind::Insert, &"z"),
                (EditKind::Equal, &"b"),
                (EditKind::Equal, &"c"),
                (EditKind::Delete, &"y"),
            ]
        );
    }

    #[test]
    fn test_empty_tokens_compare() {
        let result = diff(&["", "a", ""], &["", ""]);
        assert_eq!(
            kinds(&result),
            vec![
                (EditKind::Equal, &""),
                (EditKind::Delete, &"a"),
                (EditKind::Equal, &""),
            ]
        );
    }

    #[test]
    fn test_diff_text_lines() {
        let result = diff_text("hello\nworld\nfoo", "hello\nrust\nfoo", SplitMode::Line);
        assert_eq!(
            result,
            vec![
                EditOperation::equal("hello".to_string(), 1, 1),
                EditOperation::delete("world".to_string(), 2),
                EditOperation::insert("rust".to_string(), 2),
                EditOperation::equal("foo".to_string(), 3, 3),
            ]
        );
    }

    #[test]
    fn test_summarize() {
        let result = diff(&["a", "b", "c"], &["a", "x", "y", "c"]);
        assert_eq!(
            summarize(&result),
            DiffSummary {
                added: 2,
                removed: 1,
                unchanged: 2,
            }
        );
    }
}
