use super::{RenderOptions, ToDiffLine};
use crate::lcs::EditOperation;

pub(super) fn render<T: AsRef<str>>(script: &[EditOperation<T>], options: &RenderOptions) -> String {
    let mut lines = vec![
        format!("*** {}", options.left_label),
        format!("--- {}", options.right_label),
    ];
    lines.extend(
        script
            .iter()
            .map(|op| op.to_diff_line(options.show_line_numbers)),
    );
    lines.join("\n")
}
