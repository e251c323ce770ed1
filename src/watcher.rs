//! Input file watcher using `notify-debouncer-full` with crossbeam channels.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{self, Receiver, Sender};
use notify::RecommendedWatcher;
use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult, Debouncer, RecommendedCache};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Events emitted by the input watcher.
#[derive(Debug)]
pub enum WatchEvent {
    /// The input file was written, created or replaced.
    Changed,
    /// The input file no longer exists.
    InputRemoved,
    /// A watcher error occurred.
    Error(String),
}

/// Start watching an input file. Returns the debouncer (must be kept alive!)
/// and a receiver.
///
/// The file's parent directory is watched rather than the file itself, so
/// editors that save by writing a new file and renaming it over the old one
/// keep being tracked.
pub fn start_watcher(
    path: &Path,
    debounce_ms: u64,
) -> Result<(Debouncer<RecommendedWatcher, RecommendedCache>, Receiver<WatchEvent>)> {
    let target = path
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", path.display()))?;
    let dir = target
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("{}: has no parent directory", target.display()))?;
    let file_name = target
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| anyhow!("{}: not a file path", target.display()))?;

    let (tx, rx): (Sender<WatchEvent>, Receiver<WatchEvent>) = crossbeam_channel::unbounded();

    let mut debouncer = new_debouncer(
        Duration::from_millis(debounce_ms),
        None,
        move |result: DebounceEventResult| match result {
            Ok(events) => {
                let touched = events
                    .iter()
                    .flat_map(|event| event.paths.iter())
                    .any(|p| p.file_name() == Some(file_name.as_os_str()));
                if !touched {
                    return;
                }
                debug!(events = events.len(), "input file changed");
                if std::fs::metadata(&target).is_err() {
                    let _ = tx.send(WatchEvent::InputRemoved);
                } else {
                    let _ = tx.send(WatchEvent::Changed);
                }
            }
            Err(errors) => {
                for error in errors {
                    let _ = tx.send(WatchEvent::Error(error.to_string()));
                }
            }
        },
    )
    .context("failed to create debouncer")?;

    debouncer
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;

    Ok((debouncer, rx))
}
