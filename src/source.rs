//! Where raw path-list text comes from.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Abstraction over input loading so the watch loop can be driven from
/// memory in tests.
pub trait InputSource {
    /// Read the complete current input text.
    fn read_text(&self) -> Result<String>;
    /// Short human-readable name for status lines.
    fn label(&self) -> String;
}

/// Paths listed in a file, one per line.
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for FileInput {
    fn read_text(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("{}: failed to read input", self.path.display()))
    }

    fn label(&self) -> String {
        self.path.display().to_string()
    }
}

/// Paths piped on standard input.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_text(&self) -> Result<String> {
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        Ok(text)
    }

    fn label(&self) -> String {
        "<stdin>".to_string()
    }
}
