use super::{side_lengths, RenderOptions, ToDiffLine};
use crate::lcs::EditOperation;

/// Headers, a single hunk header spanning both texts, then only the changed tokens.
pub(super) fn render<T: AsRef<str>>(script: &[EditOperation<T>], options: &RenderOptions) -> String {
    let (old_len, new_len) = side_lengths(script);
    let mut lines = vec![
        format!("--- {}", options.left_label),
        format!("+++ {}", options.right_label),
        format!("@@ -1,{} +1,{} @@", old_len, new_len),
    ];
    lines.extend(
        script
            .iter()
            .filter(|op| op.is_change())
            .map(|op| op.to_diff_line(options.show_line_numbers)),
    );
    lines.join("\n")
}
