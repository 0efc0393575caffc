//! Brace-aware reflowing of schema declaration text.
//!
//! A generic, best-effort pretty-printer: expand-style braces (an opening
//! brace ends its line, the body indents by four spaces, the closing brace
//! returns to the parent indent), one statement per line, runs of blank lines
//! collapsed to a single one, and long lines soft-wrapped near the requested
//! width. Unbalanced or otherwise malformed input is reflowed as far as it
//! goes; this function never fails.

const INDENT: &str = "    ";

/// Reflow `text`, soft-wrapping near `width` columns.
pub fn reflow(text: &str, width: usize) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut depth: usize = 0;
    let mut line_depth: usize = 0;
    let mut in_str: Option<char> = None;
    let mut escaped = false;

    for ch in text.chars() {
        if let Some(quote) = in_str {
            line.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == quote {
                in_str = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' | '`' => {
                if line.is_empty() {
                    line_depth = depth;
                }
                line.push(ch);
                in_str = Some(ch);
            }
            '{' => {
                if line.trim().is_empty() {
                    line.clear();
                    line_depth = depth;
                } else if line.trim_end().ends_with('}') {
                    // a pending closing brace stays on its own line
                    flush(&mut out, &mut line, line_depth);
                    line_depth = depth;
                }
                line.push('{');
                flush(&mut out, &mut line, line_depth);
                depth += 1;
            }
            '}' => {
                flush(&mut out, &mut line, line_depth);
                depth = depth.saturating_sub(1);
                line_depth = depth;
                line.push('}');
            }
            ',' | ';' => {
                line.push(ch);
                flush(&mut out, &mut line, line_depth);
            }
            '\n' => {
                if line.trim().is_empty() {
                    line.clear();
                    // Keep at most one consecutive blank line.
                    if out.last().is_some_and(|last| !last.is_empty()) {
                        out.push(String::new());
                    }
                } else {
                    flush(&mut out, &mut line, line_depth);
                }
            }
            c if c.is_whitespace() => {
                if !line.is_empty() {
                    let rendered = INDENT.len() * line_depth + line.chars().count();
                    if rendered >= width {
                        flush(&mut out, &mut line, line_depth);
                    } else if !line.ends_with(' ') {
                        line.push(' ');
                    }
                }
            }
            c => {
                if line.is_empty() {
                    line_depth = depth;
                }
                line.push(c);
            }
        }
    }

    flush(&mut out, &mut line, line_depth);
    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }
    out.join("\n")
}

fn flush(out: &mut Vec<String>, line: &mut String, line_depth: usize) {
    let content = line.trim().to_string();
    line.clear();
    if content.is_empty() {
        return;
    }
    out.push(format!("{}{}", INDENT.repeat(line_depth), content));
}
