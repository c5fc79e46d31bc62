//! # Confirm Dialog
//!
//! Binary Yes/No gate shown over the orchestrator's summary. With only two
//! options every arrow key simply flips the choice; Enter commits it.

use crossterm::style::Stylize;
use log::info;

use crate::tui::TerminalGuard;
use crate::tui::event::{Key, read_key};
use crate::tui::render;

/// Binary choice state, starting at Yes.
pub struct ConfirmState {
    pub yes: bool,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self { yes: true }
    }

    /// Handle one key. Returns `"yes"` or `"no"` when the dialog terminates.
    pub fn handle_key(&mut self, key: Key) -> Option<&'static str> {
        match key {
            // Two options only, so every arrow is a toggle
            Key::Left | Key::Right | Key::Up | Key::Down => {
                self.yes = !self.yes;
                None
            }
            Key::Enter => Some(if self.yes { "yes" } else { "no" }),
            _ => None,
        }
    }

    /// Body lines: the summary followed by the highlighted choice pair.
    pub fn body(&self, summary: &[String]) -> Vec<String> {
        let mut lines: Vec<String> = summary.to_vec();
        lines.push(String::new());
        let choices = if self.yes {
            format!("  {}   No", "❯ Yes".cyan().bold())
        } else {
            format!("    Yes {}", "❯ No".cyan().bold())
        };
        lines.push(choices);
        lines.push(String::new());
        lines.push("←/→ switch · Enter confirm".dark_grey().to_string());
        lines
    }
}

impl Default for ConfirmState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the dialog to completion and returns `"yes"` or `"no"`.
pub fn run_confirm(summary: &[String], context: &[String]) -> std::io::Result<&'static str> {
    let mut state = ConfirmState::new();
    let _guard = TerminalGuard::new()?;
    loop {
        render::draw(context, &state.body(summary))?;
        if let Some(answer) = state.handle_key(read_key()?) {
            info!("Confirm dialog: {answer}");
            return Ok(answer);
        }
    }
}
