//! Quiet-period tracking for live filter edits.

use std::time::{Duration, Instant};

/// Default idle time after the last keystroke before a query is applied.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Holds the most recent unapplied query and when it was last edited.
pub struct QueryDebouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl QueryDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record an edit. Restarts the quiet period.
    pub fn touch(&mut self, query: String, now: Instant) {
        self.pending = Some((query, now));
    }

    /// Take the pending query once the quiet period has elapsed.
    pub fn ready(&mut self, now: Instant) -> Option<String> {
        let settled = self
            .pending
            .as_ref()
            .is_some_and(|(_, edited)| now.duration_since(*edited) >= self.quiet);
        if settled {
            self.flush()
        } else {
            None
        }
    }

    /// Take the pending query immediately, ignoring the quiet period.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(query, _)| query)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending query (used by the clear key).
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
