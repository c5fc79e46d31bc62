//! # Terminal Interaction Layer
//!
//! The crossterm-specific layer: key decoding, full-frame rendering, and the
//! five interactive widgets the wizard is built from. This is the only
//! module that knows about crossterm; `core` never touches the terminal.
//!
//! ## Redraw Strategy
//!
//! Widgets are small modal event loops: block on one key, update state,
//! redraw the whole frame. No diffing and no layout engine; see
//! [`render::draw`].

pub mod event;
pub mod render;
pub mod widgets;

use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::debug;

/// Scoped raw-mode + hidden-cursor acquisition for interactive widgets.
///
/// Restoration lives in `Drop` so the cursor comes back and line discipline
/// is re-enabled on every exit path: normal return, `?` propagation, and
/// unwinds.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), Hide)?;
        debug!("Terminal guard acquired (raw mode, cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        let _ = disable_raw_mode();
        debug!("Terminal guard released (cooked mode, cursor visible)");
    }
}
