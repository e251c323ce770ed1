#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use pathtree::cli::Args;
use pathtree::event_loop::{self, App};
use pathtree::pipeline::{render_text, TreeOptions};
use pathtree::render::RenderConfig;
use pathtree::source::{FileInput, InputSource, StdinInput};
use pathtree::{terminal, watcher};
use std::io::Write;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("pathtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(&args);

    let options = args.tree_options();
    if args.watch {
        run_watch(&args, options)
    } else {
        run_once(&args, &options)
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read the whole input, print the tree, exit.
fn run_once(args: &Args, options: &TreeOptions) -> Result<()> {
    let text = match args.input_file() {
        Some(path) => FileInput::new(path).read_text()?,
        None => StdinInput.read_text()?,
    };

    let tree = render_text(&text, options);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{tree}").context("failed to write output")?;
    stdout.flush().context("failed to write output")?;
    Ok(())
}

/// Live view of an input file until the user quits.
fn run_watch(args: &Args, options: TreeOptions) -> Result<()> {
    let input = args
        .input_file()
        .context("--watch needs an input file (stdin cannot be watched)")?;
    let path = input
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", input.display()))?;
    anyhow::ensure!(path.is_file(), "{}: Not a file", path.display());

    let (_debouncer, fs_rx) =
        watcher::start_watcher(&path, args.debounce_ms).context("failed to start watcher")?;

    info!(
        "watching {} (debounce={}ms, filter delay={}ms)",
        path.display(),
        args.debounce_ms,
        args.filter_delay_ms
    );

    let mut app = App::new(
        FileInput::new(path),
        options,
        Duration::from_millis(args.filter_delay_ms),
    );
    let render_config = RenderConfig {
        use_color: !args.no_color,
        terminal_width: terminal::terminal_size().0,
    };

    let mut session = terminal::init().context("failed to initialize terminal")?;
    let result = event_loop::run(session.terminal_mut(), &mut app, &render_config, fs_rx);
    drop(session);
    result
}
