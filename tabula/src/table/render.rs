//! Plain-text rendering of a [`TableView`].
//!
//! Columns are padded to their widest cell by display width and separated by
//! two spaces. Trailing whitespace is trimmed from every line.

use crate::text::{Alignment, display_width, pad_to_width};

use super::view::{CheckState, HeaderCell, SortIndicator, TableBody, TableView};

pub const CHECKED: &str = "■";
pub const UNCHECKED: &str = "□";
pub const INDETERMINATE: &str = "▣";

const SEPARATOR: &str = "  ";

/// Glyph for a checkbox state.
pub fn check_glyph(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => CHECKED,
        CheckState::Unchecked => UNCHECKED,
        CheckState::Indeterminate => INDETERMINATE,
    }
}

/// Glyph appended to a sortable header, if any.
pub fn sort_glyph(indicator: SortIndicator) -> Option<&'static str> {
    match indicator {
        SortIndicator::Unsortable => None,
        SortIndicator::Inactive => Some("↕"),
        SortIndicator::Ascending => Some("▲"),
        SortIndicator::Descending => Some("▼"),
    }
}

fn header_text(cell: &HeaderCell) -> String {
    match sort_glyph(cell.indicator) {
        Some(glyph) => format!("{} {}", cell.title, glyph),
        None => cell.title.clone(),
    }
}

/// Render the view as text lines.
pub fn render_lines<R>(view: &TableView<R>, max_column_width: Option<usize>) -> Vec<String> {
    let (header, select_all, body) = match view {
        TableView::Loading { message } => return vec![message.clone()],
        TableView::Ready {
            header,
            select_all,
            body,
        } => (header, *select_all, body),
    };

    let titles: Vec<String> = header.iter().map(header_text).collect();
    let rows = view.rows();

    let widths: Vec<usize> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let widest = rows
                .iter()
                .filter_map(|r| r.cells.get(i))
                .map(|c| display_width(c))
                .chain(std::iter::once(display_width(title)))
                .max()
                .unwrap_or(0);
            match max_column_width {
                Some(cap) => widest.min(cap),
                None => widest,
            }
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);

    let mut head: Vec<String> = Vec::with_capacity(titles.len() + 1);
    if let Some(state) = select_all {
        head.push(check_glyph(state).to_string());
    }
    for ((title, cell), width) in titles.iter().zip(header).zip(&widths) {
        head.push(pad_to_width(title, *width, cell.align));
    }
    lines.push(finish(head));

    let mut rule: Vec<String> = Vec::with_capacity(widths.len() + 1);
    if select_all.is_some() {
        rule.push("─".to_string());
    }
    rule.extend(widths.iter().map(|w| "─".repeat(*w)));
    lines.push(finish(rule));

    match body {
        TableBody::Empty { message } => lines.push(message.clone()),
        TableBody::Rows(rows) => {
            for row in rows {
                let mut parts: Vec<String> = Vec::with_capacity(row.cells.len() + 1);
                if let Some(state) = row.checkbox {
                    parts.push(check_glyph(state).to_string());
                }
                for (i, width) in widths.iter().enumerate() {
                    let text = row.cells.get(i).map(String::as_str).unwrap_or("");
                    let align = header.get(i).map(|h| h.align).unwrap_or(Alignment::Left);
                    parts.push(pad_to_width(text, *width, align));
                }
                lines.push(finish(parts));
            }
        }
    }

    lines
}

fn finish(parts: Vec<String>) -> String {
    parts.join(SEPARATOR).trim_end().to_string()
}
