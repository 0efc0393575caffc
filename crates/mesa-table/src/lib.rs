//! # mesa-table
//!
//! Aligned, bordered text tables for console reports.
//!
//! Callers hand over a row matrix (header row first), a per-column layout
//! configuration and a set of row indices at which a horizontal rule must be
//! drawn. A rule is always drawn above the table, under the header row and
//! under the last row; the supplied indices add group separators in between.
//!
//! Cells may span multiple lines, either because they contain `\n` or because
//! a fixed-width column word-wraps them. Cell measurement ignores ANSI escape
//! sequences, so colored cells do not distort the layout.

use std::collections::BTreeSet;

use unicode_width::UnicodeWidthChar;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// Layout configuration for one column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnSpec {
    pub align: Alignment,
    /// Word-wrap target width. Content wider than this is wrapped; the
    /// rendered column is as wide as its widest wrapped line.
    pub width: Option<usize>,
}

impl ColumnSpec {
    pub fn left() -> Self {
        Self::default()
    }

    pub fn right() -> Self {
        Self {
            align: Alignment::Right,
            ..Self::default()
        }
    }

    pub fn center() -> Self {
        Self {
            align: Alignment::Center,
            ..Self::default()
        }
    }

    /// Left-aligned column word-wrapped at `width`.
    pub fn wrapped(width: usize) -> Self {
        Self {
            align: Alignment::Left,
            width: Some(width),
        }
    }
}

/// Render `rows` as a bordered table.
///
/// `separators` lists row indices that get a horizontal rule drawn above
/// them; indices pointing at the table edges are absorbed by the fixed
/// top/bottom borders. An empty row matrix renders as an empty string.
pub fn render(rows: &[Vec<String>], columns: &[ColumnSpec], separators: &[usize]) -> String {
    let ncols = rows
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(columns.len());
    if rows.is_empty() || ncols == 0 {
        return String::new();
    }

    let default_spec = ColumnSpec::default();
    let spec = |c: usize| columns.get(c).unwrap_or(&default_spec);

    // Wrap every cell up front; widths derive from the wrapped content.
    let cells: Vec<Vec<Vec<String>>> = rows
        .iter()
        .map(|row| {
            (0..ncols)
                .map(|c| {
                    let text = row.get(c).map(String::as_str).unwrap_or("");
                    wrap_cell(text, spec(c))
                })
                .collect()
        })
        .collect();

    let mut widths = vec![1usize; ncols];
    for row in &cells {
        for (c, lines) in row.iter().enumerate() {
            for line in lines {
                widths[c] = widths[c].max(display_width(line));
            }
        }
    }

    let breaks: BTreeSet<usize> = separators.iter().copied().collect();
    let mut out = String::new();
    out.push_str(&rule(&widths, Edge::Top));

    for (r, row) in cells.iter().enumerate() {
        if r > 0 && (r == 1 || breaks.contains(&r)) {
            out.push_str(&rule(&widths, Edge::Middle));
        }
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for lineno in 0..height {
            out.push('║');
            for (c, lines) in row.iter().enumerate() {
                let line = lines.get(lineno).map(String::as_str).unwrap_or("");
                out.push(' ');
                out.push_str(&pad(line, widths[c], spec(c).align));
                out.push(' ');
                out.push(if c + 1 == ncols { '║' } else { '│' });
            }
            out.push('\n');
        }
    }

    out.push_str(&rule(&widths, Edge::Bottom));
    out
}

enum Edge {
    Top,
    Middle,
    Bottom,
}

fn rule(widths: &[usize], edge: Edge) -> String {
    let (left, fill, join, right) = match edge {
        Edge::Top => ('╔', '═', '╤', '╗'),
        Edge::Middle => ('╟', '─', '┼', '╢'),
        Edge::Bottom => ('╚', '═', '╧', '╝'),
    };
    let mut line = String::new();
    line.push(left);
    for (c, w) in widths.iter().enumerate() {
        for _ in 0..w + 2 {
            line.push(fill);
        }
        line.push(if c + 1 == widths.len() { right } else { join });
    }
    line.push('\n');
    line
}

fn wrap_cell(text: &str, spec: &ColumnSpec) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        match spec.width {
            Some(w) if display_width(raw) > w => {
                for piece in textwrap::wrap(raw, w) {
                    lines.push(piece.into_owned());
                }
            }
            _ => lines.push(raw.to_string()),
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pad(line: &str, width: usize, align: Alignment) -> String {
    let gap = width.saturating_sub(display_width(line));
    match align {
        Alignment::Left => format!("{line}{}", " ".repeat(gap)),
        Alignment::Right => format!("{}{line}", " ".repeat(gap)),
        Alignment::Center => {
            let lead = gap / 2;
            format!("{}{line}{}", " ".repeat(lead), " ".repeat(gap - lead))
        }
    }
}

/// Display width of a string, skipping ANSI CSI sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // CSI sequences end on a byte in '@'..='~' (e.g. 'm' for SGR).
                for c2 in chars.by_ref() {
                    if ('@'..='~').contains(&c2) {
                        break;
                    }
                }
            }
            continue;
        }
        width += UnicodeWidthChar::width(c).unwrap_or(0);
    }
    width
}
