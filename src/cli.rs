use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  treeforge -i tree.txt                   Preview what would be created
  treeforge -i tree.txt --apply           Create ./<root>/... from tree.txt
  pbpaste | treeforge --apply -p ~/src    Read the tree from stdin
  treeforge -i tree.txt -r demo --apply   Use \"demo\" as the root directory";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treeforge",
    version,
    about = "Create directories and files from a pasted tree listing",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Input tree structure file ("-", empty or omitted: stdin)
    #[arg(
        short = 'i',
        long = "input",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub input: Option<PathBuf>,

    /// Parent directory to create the structure in
    #[arg(short = 'p', long = "parent", default_value = ".")]
    pub parent: PathBuf,

    /// Override the root directory name (default: taken from the first line)
    #[arg(short = 'r', long = "root-name")]
    pub root_name: Option<String>,

    /// Actually create files and directories (default: dry run)
    #[arg(long = "apply")]
    pub apply: bool,

    /// Overwrite existing files (directories are never deleted)
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Increase output detail (repeatable: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        self
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
