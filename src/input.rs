//! Reading tree text from a file or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crossterm::tty::IsTty;
use thiserror::Error;
use tracing::info;

/// Errors raised while reading the tree text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{}: failed to read input", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input")]
    Stdin(#[source] io::Error),
}

/// Where the tree text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// A missing or empty path, or `-`, selects standard input.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() && p != Path::new("-") => {
                InputSource::File(p.to_path_buf())
            }
            _ => InputSource::Stdin,
        }
    }
}

/// Read all lines from `reader`, dropping line terminators and a leading
/// byte-order mark.
pub fn read_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    if let Some(first) = lines.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_owned();
        }
    }
    Ok(lines)
}

/// Read every line of the selected source.
pub fn read_lines(source: &InputSource) -> Result<Vec<String>, InputError> {
    match source {
        InputSource::File(path) => {
            info!("reading from file: {}", path.display());
            let file = File::open(path).map_err(|source| InputError::File {
                path: path.clone(),
                source,
            })?;
            read_from(BufReader::new(file)).map_err(|source| InputError::File {
                path: path.clone(),
                source,
            })
        }
        InputSource::Stdin => {
            info!("reading from stdin");
            let stdin = io::stdin();
            if stdin.is_tty() {
                let mut stderr = io::stderr();
                let _ = writeln!(
                    stderr,
                    "Paste your tree structure (press Ctrl+D when done):"
                );
            }
            read_from(stdin.lock()).map_err(InputError::Stdin)
        }
    }
}
