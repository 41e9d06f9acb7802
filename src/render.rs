//! Dry-run preview, progress and summary lines.

use crate::apply::{ApplySummary, CreateOutcome};
use crate::parse::{Entry, EntryKind};
use crossterm::style::{ContentStyle, Stylize};
use std::io::{self, Write};
use std::path::Path;

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Whether to emit color styling.
    pub use_color: bool,
}

fn dir_style() -> ContentStyle {
    ContentStyle::new().blue().bold()
}

fn skip_style() -> ContentStyle {
    ContentStyle::new().yellow()
}

fn header_style() -> ContentStyle {
    ContentStyle::new().bold()
}

fn done_style() -> ContentStyle {
    ContentStyle::new().green().bold()
}

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn paint(text: String, style: ContentStyle, config: &RenderConfig) -> String {
    if config.use_color {
        style.apply(text).to_string()
    } else {
        text
    }
}

/// Label column, padded so paths line up.
fn label(tag: &str, style: ContentStyle, config: &RenderConfig) -> String {
    paint(format!("{:<6}", format!("[{tag}]")), style, config)
}

fn kind_label(kind: EntryKind, config: &RenderConfig) -> String {
    match kind {
        EntryKind::Directory => label(&kind.to_string(), dir_style(), config),
        EntryKind::File => label(&kind.to_string(), ContentStyle::new(), config),
    }
}

/// Count directories and files.
pub fn totals(entries: &[Entry]) -> (usize, usize) {
    let dirs = entries.iter().filter(|e| e.is_dir()).count();
    (dirs, entries.len() - dirs)
}

/// One line per entry with its full path under `base`.
pub fn entry_line(base: &Path, entry: &Entry, config: &RenderConfig) -> String {
    let full = entry.to_path(base);
    format!(
        "  {} {}",
        kind_label(entry.kind(), config),
        sanitize_terminal_text(&full.to_string_lossy())
    )
}

/// Build every line of the dry-run preview.
pub fn preview_lines(base: &Path, entries: &[Entry], config: &RenderConfig) -> Vec<String> {
    let (dirs, files) = totals(entries);
    let mut lines = Vec::with_capacity(entries.len() + 5);

    lines.push(paint(
        "=== Dry-run mode (use --apply to create files) ===".to_string(),
        header_style(),
        config,
    ));
    lines.push(format!(
        "Base: {}",
        sanitize_terminal_text(&base.to_string_lossy())
    ));
    lines.push(String::new());
    lines.extend(entries.iter().map(|e| entry_line(base, e, config)));
    lines.push(String::new());
    lines.push(format!("Total: {} directories, {} files", dirs, files));
    lines
}

/// Write the dry-run preview to `out`.
pub fn write_preview<W: Write>(
    out: &mut W,
    base: &Path,
    entries: &[Entry],
    config: &RenderConfig,
) -> io::Result<()> {
    for line in preview_lines(base, entries, config) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Per-entry line printed while applying.
pub fn progress_line(
    full: &Path,
    entry: &Entry,
    outcome: CreateOutcome,
    config: &RenderConfig,
) -> String {
    let path = sanitize_terminal_text(&full.to_string_lossy());
    match outcome {
        CreateOutcome::Created => format!("  {} {}", kind_label(entry.kind(), config), path),
        CreateOutcome::Skipped => format!(
            "  {} {} (already exists)",
            label("SKIP", skip_style(), config),
            path
        ),
    }
}

/// Writes per-entry progress lines while applying. The first write failure
/// is kept and later lines are dropped; [`ProgressReporter::finish`] returns it.
pub struct ProgressReporter<'a, W: Write> {
    out: W,
    config: &'a RenderConfig,
    error: Option<io::Error>,
}

impl<'a, W: Write> ProgressReporter<'a, W> {
    pub fn new(out: W, config: &'a RenderConfig) -> Self {
        Self {
            out,
            config,
            error: None,
        }
    }

    pub fn report(&mut self, full: &Path, entry: &Entry, outcome: CreateOutcome) {
        if self.error.is_some() {
            return;
        }
        let line = progress_line(full, entry, outcome, self.config);
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }

    /// The first write error, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Final line printed after applying.
pub fn summary_line(summary: &ApplySummary, config: &RenderConfig) -> String {
    format!(
        "{} Created: {}, Skipped: {}",
        paint("\u{2713} Done!".to_string(), done_style(), config),
        summary.created,
        summary.skipped
    )
}
