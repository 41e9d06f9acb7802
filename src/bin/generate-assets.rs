#![forbid(unsafe_code)]
//! Writes shell completions and the man page for `treeforge`.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`).

use anyhow::Context;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;
use treeforge::cli::Args;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let bin_name = Args::command().get_name().to_string();
    for shell in Shell::value_variants() {
        let mut cmd = Args::command();
        let path = generate_to(*shell, &mut cmd, &bin_name, &completions_dir)
            .with_context(|| format!("generating {shell} completions"))?;
        eprintln!("wrote {}", path.display());
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let man_path = man_dir.join(format!("{bin_name}.1"));
    fs::write(&man_path, page).with_context(|| format!("writing {}", man_path.display()))?;
    eprintln!("wrote {}", man_path.display());

    Ok(())
}
