use super::{RenderOptions, ToDiffLine};
use crate::hunk::{hunks, Hunk, DEFAULT_CONTEXT};
use crate::lcs::EditOperation;

impl<T> Hunk<T> {
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_len, self.new_start, self.new_len
        )
    }
}

/// Hunked unified diff. Empty when nothing changed.
pub(super) fn render<T: AsRef<str> + Clone>(
    script: &[EditOperation<T>],
    options: &RenderOptions,
) -> String {
    let hunks = hunks(script, DEFAULT_CONTEXT);
    if hunks.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        format!("--- {}", options.left_label),
        format!("+++ {}", options.right_label),
    ];
    for hunk in &hunks {
        lines.push(hunk.header());
        lines.extend(
            hunk.operations
                .iter()
                .map(|op| op.to_diff_line(options.show_line_numbers)),
        );
    }
    lines.join("\n")
}
