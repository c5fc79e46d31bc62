//! # Key Reader
//!
//! Blocking translation of terminal input into the logical keys the widget
//! event loops understand. This is the only place raw crossterm key events
//! are seen; everything above works in terms of [`Key`].

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// One logical keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    Char(char),
}

/// Blocks until exactly one logical key event is available.
///
/// crossterm does the multi-byte escape decoding (arrow keys arrive as
/// `ESC [ A`-style sequences; a lone ESC is disambiguated by a short read
/// timeout inside the backend). Release/repeat events and non-key events
/// are skipped and the read loops. No buffering across calls.
///
/// Ctrl+C surfaces as `ErrorKind::Interrupted` so it propagates through the
/// widget loops via `?`, dropping the terminal guard on the way out.
pub fn read_key() -> std::io::Result<Key> {
    loop {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    // Raw mode disables ISIG, so Ctrl+C arrives as a plain key
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        return Err(std::io::Error::new(
                            std::io::ErrorKind::Interrupted,
                            "interrupted by Ctrl+C",
                        ));
                    }
                    (_, KeyCode::Up) => return Ok(Key::Up),
                    (_, KeyCode::Down) => return Ok(Key::Down),
                    (_, KeyCode::Left) => return Ok(Key::Left),
                    (_, KeyCode::Right) => return Ok(Key::Right),
                    (_, KeyCode::Enter) => return Ok(Key::Enter),
                    (_, KeyCode::Esc) => return Ok(Key::Esc),
                    (_, KeyCode::Char(' ')) => return Ok(Key::Space),
                    (_, KeyCode::Char(c)) => return Ok(Key::Char(c)),
                    _ => continue,
                }
            }
            _ => continue,
        }
    }
}
