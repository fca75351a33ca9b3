use serde::Serialize;

/// Alias for a vector of EditOperation
/// Result of the LCS diff function
pub type EditScript<T> = Vec<EditOperation<T>>;

/// Each element in a diff can be
/// new (Insert)
/// removed (Delete)
/// equal (Equal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Equal,
    Insert,
    Delete,
}

/// One step of an edit script.
///
/// `source_index` is set for `Equal` and `Delete`, `target_index` for `Equal`
/// and `Insert`. Both are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOperation<T> {
    pub kind: EditKind,
    pub token: T,
    pub source_index: Option<usize>,
    pub target_index: Option<usize>,
}

impl<T> EditOperation<T> {
    pub fn equal(token: T, source_index: usize, target_index: usize) -> Self {
        EditOperation {
            kind: EditKind::Equal,
            token,
            source_index: Some(source_index),
            target_index: Some(target_index),
        }
    }

    pub fn delete(token: T, source_index: usize) -> Self {
        EditOperation {
            kind: EditKind::Delete,
            token,
            source_index: Some(source_index),
            target_index: None,
        }
    }

    pub fn insert(token: T, target_index: usize) -> Self {
        EditOperation {
            kind: EditKind::Insert,
            token,
            source_index: None,
            target_index: Some(target_index),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != EditKind::Equal
    }
}

/// Counts of each operation kind in a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}
