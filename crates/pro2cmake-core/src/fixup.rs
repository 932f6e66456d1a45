//! Backslash line-continuation folding for raw project text

/// Fold backslash-continued lines into single logical lines.
///
/// A line is continued when it ends in `\`, optionally followed by spaces or
/// tabs, right before `\n`. The marker, any further backslashes or blanks in
/// front of it, and the newline are removed. Consecutive pieces are joined by
/// a single space. Every other line is copied unchanged, so the output never
/// contains a continuation marker and folding twice equals folding once.
pub fn fixup_line_continuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        match continued_body(line) {
            Some(body) => {
                out.push_str(body);
                if !out.is_empty() && !out.ends_with([' ', '\t', '\n']) {
                    out.push(' ');
                }
            }
            None => out.push_str(line),
        }
    }

    out
}

/// Returns the line content before the continuation marker, if there is one.
fn continued_body(line: &str) -> Option<&str> {
    let content = line.strip_suffix('\n')?;
    let marked = content.trim_end_matches([' ', '\t']).strip_suffix('\\')?;
    Some(marked.trim_end_matches([' ', '\t', '\\']))
}
