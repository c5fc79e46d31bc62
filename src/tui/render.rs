//! # Render Surface
//!
//! Full-frame rendering. Every state change clears the screen and reprints
//! the banner, any prior-step summary lines, and the widget body. Frames are
//! a few dozen lines at most, so a complete redraw per keystroke beats the
//! complexity of diffing.

use std::io::{Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

const BANNER: &str = r#"  ____  _   _ ___ ____ ___ _____
 / ___|| | | |_ _|  _ \_ _|_   _|
 \___ \| |_| || || |_) | |  | |
  ___) |  _  || ||  __/| |  | |
 |____/|_| |_|___|_|  |___| |_|"#;

/// Builds one complete frame from an immutable snapshot of context and body.
///
/// Lines are joined with CRLF because widgets draw while raw mode is active
/// and LF alone no longer returns the cursor to column zero.
pub fn frame(context: &[String], body: &[String]) -> String {
    let mut lines: Vec<String> = BANNER.lines().map(str::to_string).collect();
    lines.push(String::new());
    if !context.is_empty() {
        lines.extend(context.iter().cloned());
        lines.push(String::new());
    }
    lines.extend(body.iter().cloned());
    lines.join("\r\n")
}

/// Clears the screen and writes the frame in a single flush.
pub fn draw(context: &[String], body: &[String]) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.write_all(frame(context, body).as_bytes())?;
    out.write_all(b"\r\n")?;
    out.flush()
}
