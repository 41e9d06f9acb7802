//! Tree-text parsing: line filtering, indentation scanning, branch trimming and
//! path resolution.

mod branch;
mod builder;
mod comment;
mod indent;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use branch::trim_branch;
pub use builder::{parse_str, parse_tree, root_label};
pub use comment::{cut_comment, filter_line};
pub use indent::consume_indent;

/// Whether an entry is created as a directory or as an empty file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => f.write_str("DIR"),
            EntryKind::File => f.write_str("FILE"),
        }
    }
}

fn checked_path(path: String) -> String {
    assert!(
        path.split('/').all(|s| !matches!(s, "" | "." | "..")),
        "entry path must be relative and normalized, got {path:?}"
    );
    path
}

/// A single resolved line of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Relative, '/'-separated, never empty.
    path: String,
    kind: EntryKind,
}

impl Entry {
    pub(crate) fn new(path: String, kind: EntryKind) -> Self {
        debug_assert!(!path.is_empty());
        Self { path, kind }
    }

    /// Build a directory entry from a relative, '/'-separated path.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty, starts with `/`, or has an empty, `.` or
    /// `..` segment.
    pub fn dir(path: impl Into<String>) -> Self {
        Self::new(checked_path(path.into()), EntryKind::Directory)
    }

    /// Build a file entry. Panics like [`Entry::dir`].
    pub fn file(path: impl Into<String>) -> Self {
        Self::new(checked_path(path.into()), EntryKind::File)
    }

    /// Relative path using '/' separators.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Map the relative path onto `base`, one path component per segment.
    pub fn to_path(&self, base: &Path) -> PathBuf {
        let mut full = base.to_path_buf();
        full.extend(self.path.split('/'));
        full
    }
}

/// Errors that abort a parse. No partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no lines at all.
    #[error("empty tree: no input lines")]
    EmptyInput,

    /// The first line does not name a root.
    #[error("invalid root line {line:?}: expected a root directory name")]
    InvalidRoot { line: String },
}
