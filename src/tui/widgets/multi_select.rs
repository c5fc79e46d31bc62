//! # Multi-Select Menu
//!
//! Same wrapping cursor as the single-select, plus a selection bit per
//! option toggled with Space. Enter returns the selected labels joined in
//! original option order; with nothing selected it falls back to the first
//! option so the result is never empty.

use crossterm::style::Stylize;
use log::info;

use crate::tui::TerminalGuard;
use crate::tui::event::{Key, read_key};
use crate::tui::render;

/// Cursor + selection state for a multi-select menu.
///
/// `selected` always has the same length as `options`; the menu opens with
/// exactly the first option selected.
pub struct MultiSelectState {
    pub options: Vec<String>,
    pub cursor: usize,
    pub selected: Vec<bool>,
}

impl MultiSelectState {
    pub fn new(options: Vec<String>) -> Self {
        debug_assert!(!options.is_empty());
        let mut selected = vec![false; options.len()];
        selected[0] = true;
        Self {
            options,
            cursor: 0,
            selected,
        }
    }

    /// Handle one key. Returns the joined result when the menu terminates.
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
            Key::Space => {
                // Toggle in place; the cursor does not move
                self.selected[self.cursor] = !self.selected[self.cursor];
                None
            }
            Key::Enter => Some(self.result()),
            _ => None,
        }
    }

    /// Selected labels in option order, comma-and-space joined. Falls back
    /// to the first option's label when nothing is selected.
    pub fn result(&self) -> String {
        let chosen: Vec<&str> = self
            .options
            .iter()
            .zip(&self.selected)
            .filter(|&(_, &on)| on)
            .map(|(label, _)| label.as_str())
            .collect();
        if chosen.is_empty() {
            self.options[0].clone()
        } else {
            chosen.join(", ")
        }
    }

    /// Body lines distinguishing all four cursor/selected combinations.
    pub fn body(&self, title: &str) -> Vec<String> {
        let mut lines = vec![title.bold().to_string(), String::new()];
        for (i, option) in self.options.iter().enumerate() {
            let mark = if self.selected[i] { "[x]" } else { "[ ]" };
            let line = if i == self.cursor {
                format!("  {} {} {}", "❯".cyan(), mark.cyan(), option.as_str().cyan())
            } else if self.selected[i] {
                format!("    {} {}", mark.green(), option)
            } else {
                format!("    {mark} {option}")
            };
            lines.push(line);
        }
        lines.push(String::new());
        lines.push("↑/↓ move · Space toggle · Enter confirm".dark_grey().to_string());
        lines
    }
}

/// Runs the menu to completion and returns the joined selection.
pub fn run_multi_select(
    title: &str,
    context: &[String],
    options: &[String],
) -> std::io::Result<String> {
    let mut state = MultiSelectState::new(options.to_vec());
    let _guard = TerminalGuard::new()?;
    loop {
        render::draw(context, &state.body(title))?;
        if let Some(result) = state.handle_key(read_key()?) {
            info!("{title}: selected {result:?}");
            return Ok(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> MultiSelectState {
        MultiSelectState::new(vec![
            "qa".to_string(),
            "qa-team".to_string(),
            "devs".to_string(),
        ])
    }

    #[test]
    fn test_initial_state_selects_only_first_option() {
        for n in 1..=5 {
            let s = MultiSelectState::new((0..n).map(|i| format!("g{i}")).collect());
            assert_eq!(s.selected.len(), n);
            assert!(s.selected[0]);
            assert!(s.selected[1..].iter().all(|&on| !on));
        }
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut s = groups();
        s.handle_key(Key::Down);
        let before = s.selected.clone();
        s.handle_key(Key::Space);
        assert_ne!(s.selected, before);
        s.handle_key(Key::Space);
        assert_eq!(s.selected, before);
    }

    #[test]
    fn test_toggle_does_not_move_cursor() {
        let mut s = groups();
        s.handle_key(Key::Down);
        s.handle_key(Key::Space);
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn test_result_joins_in_option_order() {
        let mut s = groups();
        // Deselect "qa", select "devs": cursor is on qa at start
        s.handle_key(Key::Space);
        s.handle_key(Key::Down);
        s.handle_key(Key::Down);
        s.handle_key(Key::Space);
        s.handle_key(Key::Up);
        s.handle_key(Key::Space); // select "qa-team" too
        assert_eq!(s.result(), "qa-team, devs");
    }

    #[test]
    fn test_result_with_only_middle_option() {
        let mut s = groups();
        s.handle_key(Key::Space); // deselect "qa"
        s.handle_key(Key::Down);
        s.handle_key(Key::Space); // select "qa-team"
        assert_eq!(s.handle_key(Key::Enter).as_deref(), Some("qa-team"));
    }

    #[test]
    fn test_empty_selection_falls_back_to_first_option() {
        let mut s = groups();
        s.handle_key(Key::Space); // deselect the only selected option
        assert_eq!(s.result(), "qa");
    }

    #[test]
    fn test_cursor_wraps_like_single_select() {
        let mut s = groups();
        s.handle_key(Key::Up);
        assert_eq!(s.cursor, 2);
        s.handle_key(Key::Down);
        assert_eq!(s.cursor, 0);
    }
}
