//! Creating the parsed structure on disk.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::parse::{cut_comment, root_label, Entry, EntryKind};

/// Root directory name used when neither the override nor the first line
/// provides one.
pub const FALLBACK_ROOT: &str = "output";

/// Errors raised while creating entries.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("creating base directory {}", path.display())]
    Base {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("creating directory {}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("creating file {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The file already existed and overwriting was not requested.
    Skipped,
}

/// Options for [`apply_entries`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Truncate files that already exist. Directories are never removed.
    pub force: bool,
}

/// Counts reported after an apply run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub created: usize,
    pub skipped: usize,
}

/// Pick the root directory name: a non-empty override wins, then the first
/// line of the tree text, then [`FALLBACK_ROOT`].
///
/// The result is always relative so the root stays under the chosen parent:
/// root and prefix components are dropped and `..` never climbs above it.
/// A root of only `.` keeps the parent itself as the base.
pub fn root_name(override_name: Option<&str>, first_line: &str) -> String {
    let label = match override_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => root_label(cut_comment(first_line)),
    };
    relative_root(label).unwrap_or_else(|| FALLBACK_ROOT.to_owned())
}

fn relative_root(label: &str) -> Option<String> {
    let path = Path::new(label);
    let mut segments: Vec<&str> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            Component::ParentDir => {
                segments.pop();
            }
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    if !segments.is_empty() {
        return Some(segments.join("/"));
    }
    let only_current = path.components().next().is_some()
        && path.components().all(|c| c == Component::CurDir);
    only_current.then(|| ".".to_owned())
}

/// Create one entry under `base`.
pub fn create_entry(base: &Path, entry: &Entry, force: bool) -> Result<CreateOutcome, ApplyError> {
    let full = entry.to_path(base);

    match entry.kind() {
        EntryKind::Directory => {
            fs::create_dir_all(&full).map_err(|source| ApplyError::Directory {
                path: full.clone(),
                source,
            })?;
            debug!("created directory {}", full.display());
            Ok(CreateOutcome::Created)
        }
        EntryKind::File => {
            if full.exists() && !force {
                debug!("skipped existing file {}", full.display());
                return Ok(CreateOutcome::Skipped);
            }
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).map_err(|source| ApplyError::Directory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            File::create(&full).map_err(|source| ApplyError::File {
                path: full.clone(),
                source,
            })?;
            debug!("created file {}", full.display());
            Ok(CreateOutcome::Created)
        }
    }
}

/// Create `base` and every entry beneath it, in order. `on_progress` is called
/// after each entry with its full path and outcome. Stops at the first error.
pub fn apply_entries<F>(
    base: &Path,
    entries: &[Entry],
    options: ApplyOptions,
    mut on_progress: F,
) -> Result<ApplySummary, ApplyError>
where
    F: FnMut(&Path, &Entry, CreateOutcome),
{
    info!("creating structure in {}", base.display());
    fs::create_dir_all(base).map_err(|source| ApplyError::Base {
        path: base.to_path_buf(),
        source,
    })?;

    let mut summary = ApplySummary::default();
    for entry in entries {
        let outcome = create_entry(base, entry, options.force)?;
        match outcome {
            CreateOutcome::Created => summary.created += 1,
            CreateOutcome::Skipped => summary.skipped += 1,
        }
        on_progress(&entry.to_path(base), entry, outcome);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_name_wins() {
        assert_eq!(root_name(Some("custom-root"), "myapp/"), "custom-root");
    }

    #[test]
    fn root_name_from_first_line() {
        assert_eq!(root_name(None, "myapp/"), "myapp");
        assert_eq!(root_name(None, "myapp"), "myapp");
        assert_eq!(root_name(None, "myapp/ # the app"), "myapp");
    }

    #[test]
    fn blank_root_falls_back() {
        assert_eq!(root_name(None, ""), FALLBACK_ROOT);
        assert_eq!(root_name(None, "   "), FALLBACK_ROOT);
        assert_eq!(root_name(Some("  "), "   "), FALLBACK_ROOT);
    }

    #[test]
    fn absolute_root_becomes_relative() {
        assert_eq!(root_name(None, "/tmp/x/"), "tmp/x");
        assert_eq!(root_name(Some("/abs"), "app/"), "abs");
        assert_eq!(root_name(None, "../../up/"), "up");
        assert_eq!(root_name(Some("a/../b"), "app/"), "b");
    }

    #[test]
    fn root_without_a_name_stays_in_parent_or_falls_back() {
        assert_eq!(root_name(None, "."), ".");
        assert_eq!(root_name(None, "./"), ".");
        assert_eq!(root_name(None, ".."), FALLBACK_ROOT);
        assert_eq!(root_name(Some("/"), "app/"), FALLBACK_ROOT);
    }
}
