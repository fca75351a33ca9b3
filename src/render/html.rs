use super::RenderOptions;
use crate::lcs::{EditKind, EditOperation};
use html_escape::encode_text;

pub(super) fn render<T: AsRef<str>>(script: &[EditOperation<T>], options: &RenderOptions) -> String {
    let span = if options.show_line_numbers { " colspan=\"2\"" } else { "" };
    let mut rows = vec![
        "<table class=\"diff-table\">".to_string(),
        format!(
            "<thead><tr><th{span}>{}</th><th{span}>{}</th></tr></thead>",
            encode_text(&options.left_label),
            encode_text(&options.right_label),
        ),
        "<tbody>".to_string(),
    ];
    rows.extend(script.iter().map(|op| row(op, options.show_line_numbers)));
    rows.push("</tbody>".to_string());
    rows.push("</table>".to_string());
    rows.join("\n")
}

fn row<T: AsRef<str>>(op: &EditOperation<T>, show_line_numbers: bool) -> String {
    let escaped = encode_text(op.token.as_ref());
    let token: &str = &escaped;
    let (class, left, right) = match op.kind {
        EditKind::Equal => ("diff-equal", Some(token), Some(token)),
        EditKind::Delete => ("diff-delete", Some(token), None),
        EditKind::Insert => ("diff-insert", None, Some(token)),
    };
    format!(
        "<tr class=\"{class}\">{}{}</tr>",
        cells(left, op.source_index, show_line_numbers),
        cells(right, op.target_index, show_line_numbers),
    )
}

fn cells(text: Option<&str>, number: Option<usize>, show_line_numbers: bool) -> String {
    let text = format!("<td class=\"diff-text\">{}</td>", text.unwrap_or_default());
    if show_line_numbers {
        let number = number.map(|n| n.to_string()).unwrap_or_default();
        format!("<td class=\"line-number\">{number}</td>{text}")
    } else {
        text
    }
}
