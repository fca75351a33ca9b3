use crate::lcs::EditOperation;

/// A run of changes from an edit script together with its surrounding context.
///
/// Starts are 1-based. A range of length 0 starts at the line before it, so
/// an insertion at the top of a text has `old_start == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub operations: Vec<EditOperation<T>>,
}
