//! Watch-mode event loop: multiplexes input-file events, keyboard input and
//! the filter quiet period.

use crate::debounce::QueryDebouncer;
use crate::pipeline::{render_text, TreeOptions};
use crate::render::{help_bar_line, query_line, status_bar_line, tree_to_lines, RenderConfig};
use crate::source::InputSource;
use crate::terminal::tree_viewport_height;
use crate::watcher::WatchEvent;
use anyhow::{Context, Result};
use crossbeam_channel::{select, Receiver};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How often the loop wakes up to release debounced queries.
const TICK: Duration = Duration::from_millis(50);

/// All state of the live view. Key handling and recomputation are
/// independent of the terminal so they can be driven directly.
pub struct App<S: InputSource> {
    source: S,
    text: String,
    options: TreeOptions,
    output: String,
    draft: String,
    editing: bool,
    debouncer: QueryDebouncer,
    scroll: u16,
    viewport: u16,
    last_change: Option<String>,
    note: Option<String>,
    quit: bool,
}

impl<S: InputSource> App<S> {
    /// Create the app and load the input once.
    pub fn new(source: S, options: TreeOptions, quiet_period: Duration) -> Self {
        let draft = options.query.clone();
        let mut app = Self {
            source,
            text: String::new(),
            options,
            output: String::new(),
            draft,
            editing: false,
            debouncer: QueryDebouncer::new(quiet_period),
            scroll: 0,
            viewport: 20,
            last_change: None,
            note: None,
            quit: false,
        };
        app.reload();
        app
    }

    /// Re-read the input and recompute the tree. A failed read keeps the
    /// previous text and shows the error in the status bar.
    pub fn reload(&mut self) {
        match self.source.read_text() {
            Ok(text) => {
                self.text = text;
                self.note = None;
            }
            Err(e) => {
                warn!("reload failed: {e:#}");
                self.note = Some(format!("{e:#}"));
            }
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.output = render_text(&self.text, &self.options);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn line_count(&self) -> usize {
        self.output.split('\n').count()
    }

    fn max_scroll(&self) -> u16 {
        let hidden = self.line_count().saturating_sub(self.viewport as usize);
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }

    /// Record the number of tree rows currently visible.
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport = rows.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// The input file changed on disk.
    pub fn input_changed(&mut self, at: String) {
        self.last_change = Some(at);
        self.reload();
    }

    /// Show a transient message in the status bar.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    /// Reset toggles, filter and scroll position. The input text is kept.
    pub fn clear(&mut self) {
        self.options = TreeOptions::default();
        self.draft.clear();
        self.editing = false;
        self.debouncer.clear();
        self.scroll = 0;
        self.note = None;
        self.recompute();
    }

    /// Apply the pending filter query once its quiet period has passed.
    /// Returns whether the output changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.ready(now) {
            Some(query) => {
                debug!(%query, "applying filter");
                self.options.query = query;
                self.recompute();
                true
            }
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        if self.editing {
            self.handle_edit_key(key, now);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') => {
                self.options.trailing_slash = !self.options.trailing_slash;
                self.recompute();
            }
            KeyCode::Char('c') => {
                self.options.comment = !self.options.comment;
                self.recompute();
            }
            KeyCode::Char('/') => self.editing = true,
            KeyCode::Char('x') => self.clear(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(self.viewport),
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(self.viewport).min(self.max_scroll());
            }
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.max_scroll(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => {
                self.debouncer.clear();
                self.options.query = self.draft.clone();
                self.editing = false;
                self.recompute();
            }
            KeyCode::Esc => self.editing = false,
            KeyCode::Backspace => {
                self.draft.pop();
                self.debouncer.touch(self.draft.clone(), now);
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.draft.push(c);
                self.debouncer.touch(self.draft.clone(), now);
            }
            _ => {}
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Draw one frame: tree, filter line, status bar, help bar.
    pub fn draw(&self, frame: &mut Frame, config: &RenderConfig) {
        let [body, filter, status, help] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let lines = tree_to_lines(&self.output, config);
        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), body);

        let shown = if self.editing {
            self.draft.as_str()
        } else {
            self.options.query.as_str()
        };
        frame.render_widget(
            Paragraph::new(query_line(shown, self.editing, self.debouncer.is_pending())),
            filter,
        );
        frame.render_widget(
            Paragraph::new(status_bar_line(
                &self.source.label(),
                &self.options,
                self.line_count(),
                self.last_change.as_deref(),
                self.note.as_deref(),
                config.terminal_width,
            )),
            status,
        );
        frame.render_widget(Paragraph::new(help_bar_line(self.editing)), help);
    }
}

/// Run the live view. Blocks until the user quits, the process is
/// interrupted, or the watcher goes away.
pub fn run<S: InputSource>(
    terminal: &mut DefaultTerminal,
    app: &mut App<S>,
    render_config: &RenderConfig,
    fs_rx: Receiver<WatchEvent>,
) -> Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));

    // Spawn keyboard input reader
    let (key_tx, key_rx) = crossbeam_channel::unbounded();
    let shutdown_clone = shutdown.clone();
    let input_handle = thread::spawn(move || {
        while !shutdown_clone.load(Ordering::Relaxed) {
            // Poll with a timeout so we can check the shutdown flag
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if key_tx.send(evt).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let (signal_tx, signal_rx) = crossbeam_channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = signal_tx.try_send(());
    })
    .context("failed to install interrupt handler")?;

    let mut config = render_config.clone();
    let result = loop {
        let size = match terminal.size() {
            Ok(size) => size,
            Err(e) => break Err(anyhow::Error::new(e).context("failed to query terminal size")),
        };
        config.terminal_width = size.width;
        app.set_viewport(tree_viewport_height(size.height));
        if let Err(e) = terminal.draw(|frame| app.draw(frame, &config)) {
            break Err(anyhow::Error::new(e).context("failed to draw frame"));
        }
        if app.should_quit() {
            break Ok(());
        }

        select! {
            recv(fs_rx) -> msg => {
                match msg {
                    Ok(WatchEvent::Changed) => app.input_changed(clock_now()),
                    Ok(WatchEvent::InputRemoved) => {
                        info!("input file removed");
                        app.set_note("Input file removed; waiting for it to return");
                    }
                    Ok(WatchEvent::Error(e)) => {
                        debug!("watcher error: {e}");
                        app.set_note(format!("Watcher error: {e}"));
                    }
                    // Channel closed, watcher thread died
                    Err(_) => break Ok(()),
                }
            }
            recv(key_rx) -> msg => {
                match msg {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key, Instant::now());
                    }
                    Ok(_) => {}
                    Err(_) => break Ok(()),
                }
            }
            recv(signal_rx) -> _ => break Ok(()),
            default(TICK) => {}
        }
        app.tick(Instant::now());
    };

    // Signal shutdown to input thread and wait
    shutdown.store(true, Ordering::Relaxed);
    let _ = input_handle.join();

    result
}

/// Wall-clock HH:MM:SS (UTC) for the status bar.
fn clock_now() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs();
    let h = (secs % 86400) / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
