use tracing::{debug, trace};

use super::branch::trim_branch;
use super::comment::filter_line;
use super::indent::consume_indent;
use super::{Entry, EntryKind, ParseError};

/// Resolved parent path for each nesting depth, valid for one parse.
///
/// Slot 0 is the root (empty path). A slot that was never set also reads as
/// the root, so out-of-order indentation degrades to root-relative placement.
#[derive(Debug)]
struct DepthParents {
    parents: Vec<String>,
}

impl DepthParents {
    fn new() -> Self {
        Self {
            parents: vec![String::new()],
        }
    }

    fn parent_of(&self, depth: usize) -> &str {
        self.parents.get(depth).map_or("", String::as_str)
    }

    /// Record `dir` as the parent for `depth + 1` and forget every deeper
    /// level left over from a previous sibling's subtree.
    fn enter(&mut self, depth: usize, dir: &str) {
        self.parents.resize(depth + 1, String::new());
        self.parents.push(dir.to_owned());
    }
}

/// Join `name` onto `parent` with '/' semantics.
///
/// Empty and `.` segments are dropped and `..` removes the previous segment,
/// never climbing above the root. Returns `None` when nothing remains.
fn join_relative(parent: &str, name: &str) -> Option<String> {
    let mut segments: Vec<&str> = parent.split('/').filter(|s| !s.is_empty()).collect();
    for segment in name.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
    (!segments.is_empty()).then(|| segments.join("/"))
}

/// Normalize the root line: surrounding whitespace and one trailing `/`
/// removed.
pub fn root_label(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

/// Parse a tree listing. The first line names the root and is not emitted;
/// every following content line becomes one [`Entry`], in input order.
pub fn parse_tree<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Entry>, ParseError> {
    let (root, body) = lines.split_first().ok_or(ParseError::EmptyInput)?;
    let root = root.as_ref();
    if root_label(root).is_empty() {
        return Err(ParseError::InvalidRoot {
            line: root.to_owned(),
        });
    }

    let mut entries = Vec::new();
    let mut parents = DepthParents::new();

    for (idx, raw) in body.iter().enumerate() {
        let line_no = idx + 2;
        let Some(line) = filter_line(raw.as_ref()) else {
            continue;
        };

        let (depth, rest) = consume_indent(line);
        let name = trim_branch(rest).trim();
        if name.is_empty() {
            trace!(line = line_no, "no name on line, skipped");
            continue;
        }

        let (name, kind) = match name.strip_suffix('/') {
            Some(dir) => (dir, EntryKind::Directory),
            None => (name, EntryKind::File),
        };

        let Some(path) = join_relative(parents.parent_of(depth), name) else {
            debug!(line = line_no, entry = name, "name resolves to no path, skipped");
            continue;
        };
        trace!(line = line_no, depth, %kind, path = %path, "entry");

        if kind == EntryKind::Directory {
            parents.enter(depth, &path);
        }
        entries.push(Entry::new(path, kind));
    }

    debug!(lines = lines.len(), entries = entries.len(), "parsed tree");
    Ok(entries)
}

/// Parse tree text held in a single string.
pub fn parse_str(text: &str) -> Result<Vec<Entry>, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_tree(&lines)
}
