//! Terminal management: RAII session around ratatui's alternate screen.

use crossterm::terminal;
use ratatui::DefaultTerminal;
use std::io;

/// Owns the ratatui terminal and restores the screen on drop (even on
/// early return through `?`).
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Enter the alternate screen and raw mode. ratatui also installs a panic
/// hook that restores the terminal before the panic message is printed.
pub fn init() -> io::Result<TerminalSession> {
    let terminal = ratatui::try_init()?;
    Ok(TerminalSession { terminal })
}

/// Get the current terminal size, falling back to (80, 24) if unavailable.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or((80, 24))
}

/// Number of tree rows visible in a frame of `height` rows, after the filter,
/// status and help bars.
pub fn tree_viewport_height(height: u16) -> u16 {
    height.saturating_sub(3).max(1)
}
