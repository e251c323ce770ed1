use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::TreeOptions;

const EXAMPLES: &str = "\
Examples:
  git ls-files | pathtree
  pathtree -s -c paths.txt
  pathtree -f 'src !tests' paths.txt
  pathtree --watch paths.txt";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pathtree",
    version,
    about = "Render a flat list of paths as a directory tree",
    after_help = EXAMPLES
)]
pub struct Args {
    /// File with one path per line ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Append a trailing slash to every directory
    #[arg(short = 's', long = "trailing-slash")]
    pub trailing_slash: bool,

    /// Append an aligned '#' comment marker to every directory
    #[arg(short = 'c', long = "comment")]
    pub comment: bool,

    /// Filter query: whitespace-separated patterns, '!pattern' excludes
    #[arg(short = 'f', long = "filter", default_value = "")]
    pub filter: String,

    /// Keep a live view of the input file, re-rendering when it changes
    #[arg(short = 'w', long = "watch")]
    pub watch: bool,

    /// File-change debounce interval in milliseconds (minimum 50)
    #[arg(long = "debounce", default_value = "200")]
    pub debounce_ms: u64,

    /// Quiet period in milliseconds before a typed filter is applied
    #[arg(long = "filter-delay", default_value = "300")]
    pub filter_delay_ms: u64,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.debounce_ms < 50 {
            self.debounce_ms = 50;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// The input file, or `None` when reading stdin.
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            trailing_slash: self.trailing_slash,
            comment: self.comment,
            query: self.filter.clone(),
        }
    }

    /// Default tracing filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }
}
