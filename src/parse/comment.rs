/// Characters that, directly before a `#`, mark the start of a comment.
fn opens_comment(prev: char) -> bool {
    matches!(prev, ' ' | '\t' | '\u{2502}' | '|')
}

/// Return `None` for blank lines, otherwise the line with any trailing
/// comment removed.
pub fn filter_line(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(cut_comment(raw))
    }
}

/// Strip a trailing comment.
///
/// A `#` starts a comment when it opens the line or directly follows a space,
/// tab or vertical bar (`│` / `|`). Any other `#` is part of a name, so
/// `v1#draft.md` is kept whole. No space is required after the `#`.
pub fn cut_comment(line: &str) -> &str {
    if let Some(idx) = line.find(" #") {
        return &line[..idx];
    }

    let mut prev = None;
    for (idx, c) in line.char_indices() {
        if c == '#' && (idx == 0 || prev.is_some_and(opens_comment)) {
            return &line[..idx];
        }
        prev = Some(c);
    }
    line
}
