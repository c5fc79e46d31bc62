//! # Single-Select Menu
//!
//! Arrow keys move a wrapping cursor; Enter returns the highlighted label.
//! Every other key is ignored.

use crossterm::style::Stylize;
use log::info;

use crate::tui::TerminalGuard;
use crate::tui::event::{Key, read_key};
use crate::tui::render;

/// Cursor state for a single-select menu.
pub struct SelectState {
    pub options: Vec<String>,
    pub cursor: usize,
}

impl SelectState {
    pub fn new(options: Vec<String>) -> Self {
        debug_assert!(!options.is_empty());
        Self { options, cursor: 0 }
    }

    /// Handle one key. Returns the chosen label when the menu terminates.
    pub fn handle_key(&mut self, key: Key) -> Option<String> {
        let len = self.options.len();
        match key {
            Key::Up => {
                self.cursor = (self.cursor + len - 1) % len;
                None
            }
            Key::Down => {
                self.cursor = (self.cursor + 1) % len;
                None
            }
            Key::Enter => Some(self.options[self.cursor].clone()),
            // Character keys and Space have no effect
            _ => None,
        }
    }

    /// Body lines for the render surface; the cursor row is highlighted.
    pub fn body(&self, title: &str) -> Vec<String> {
        let mut lines = vec![title.bold().to_string(), String::new()];
        for (i, option) in self.options.iter().enumerate() {
            if i == self.cursor {
                lines.push(format!("  {} {}", "❯".cyan(), option.as_str().cyan()));
            } else {
                lines.push(format!("    {option}"));
            }
        }
        lines.push(String::new());
        lines.push("↑/↓ move · Enter select".dark_grey().to_string());
        lines
    }
}

/// Runs the menu to completion and returns the chosen label.
pub fn run_select(title: &str, context: &[String], options: &[&str]) -> std::io::Result<String> {
    let mut state = SelectState::new(options.iter().map(|s| s.to_string()).collect());
    let _guard = TerminalGuard::new()?;
    loop {
        render::draw(context, &state.body(title))?;
        if let Some(choice) = state.handle_key(read_key()?) {
            info!("{title}: selected {choice:?}");
            return Ok(choice);
        }
    }
}
