#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use treeforge::apply::{apply_entries, root_name, ApplyOptions};
use treeforge::cli::Args;
use treeforge::input::{read_lines, InputSource};
use treeforge::parse::parse_tree;
use treeforge::render::{summary_line, write_preview, ProgressReporter, RenderConfig};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("treeforge: {e:#}");
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only the preview and progress lines.
/// `RUST_LOG` overrides the level chosen by `-v` / `--quiet`.
fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(&args);

    let source = InputSource::from_arg(args.input.as_deref());
    let lines = read_lines(&source).context("failed to read tree")?;
    info!("read {} lines", lines.len());

    let entries = parse_tree(&lines).context("failed to parse tree")?;
    info!("parsed {} entries", entries.len());

    let first_line = lines.first().map(String::as_str).unwrap_or_default();
    let base = args
        .parent
        .join(root_name(args.root_name.as_deref(), first_line));

    let render_config = RenderConfig {
        use_color: !args.no_color && io::stdout().is_tty(),
    };
    let mut stdout = io::stdout().lock();

    if !args.apply {
        write_preview(&mut stdout, &base, &entries, &render_config)
            .context("failed to write preview")?;
        return Ok(());
    }

    let show_progress = args.verbose > 0;
    let mut progress = ProgressReporter::new(&mut stdout, &render_config);
    let summary = apply_entries(
        &base,
        &entries,
        ApplyOptions { force: args.force },
        |full, entry, outcome| {
            if show_progress {
                progress.report(full, entry, outcome);
            }
        },
    )
    .context("failed to create structure")?;
    progress.finish().context("failed to write progress")?;

    if !args.quiet {
        writeln!(stdout, "\n{}", summary_line(&summary, &render_config))?;
    }
    Ok(())
}
