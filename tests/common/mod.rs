#![allow(dead_code)]

use pathtree::event_loop::App;
use pathtree::pipeline::TreeOptions;
use pathtree::render::RenderConfig;
use pathtree::source::InputSource;
use pathtree::tree::{build_tree, render_tree};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// The three-directory fixture used throughout: `a` holding `x` and `y`,
/// then `b`. The files only exist to make `x`, `y` and `b` directories.
pub const BRANCH_PATHS: &[&str] = &["a/x/f.txt", "a/y/f.txt", "b/g.txt"];

pub const BRANCH_TREE: &str = ".\n\
\u{251c}\u{2500}\u{2500} a\n\
\u{2502}   \u{251c}\u{2500}\u{2500} x\n\
\u{2502}   \u{2514}\u{2500}\u{2500} y\n\
\u{2514}\u{2500}\u{2500} b";

/// Render paths with no decoration.
pub fn render(paths: &[&str]) -> String {
    render_tree(&build_tree(paths))
}

/// RenderConfig with color disabled.
pub fn no_color_render_config(width: u16) -> RenderConfig {
    RenderConfig {
        use_color: false,
        terminal_width: width,
    }
}

/// RenderConfig with color enabled.
pub fn color_render_config(width: u16) -> RenderConfig {
    RenderConfig {
        use_color: true,
        terminal_width: width,
    }
}

/// In-memory input whose text can be swapped while an `App` holds it.
#[derive(Clone)]
pub struct MemoryInput {
    text: Rc<RefCell<Result<String, String>>>,
}

impl MemoryInput {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rc::new(RefCell::new(Ok(text.to_string()))),
        }
    }

    pub fn set(&self, text: &str) {
        *self.text.borrow_mut() = Ok(text.to_string());
    }

    pub fn fail(&self, message: &str) {
        *self.text.borrow_mut() = Err(message.to_string());
    }
}

impl InputSource for MemoryInput {
    fn read_text(&self) -> anyhow::Result<String> {
        self.text.borrow().clone().map_err(anyhow::Error::msg)
    }

    fn label(&self) -> String {
        "<memory>".to_string()
    }
}

/// An app over `text` with a 300ms filter quiet period.
pub fn make_app(text: &str) -> (App<MemoryInput>, MemoryInput) {
    let input = MemoryInput::new(text);
    let app = App::new(
        input.clone(),
        TreeOptions::default(),
        Duration::from_millis(300),
    );
    (app, input)
}
