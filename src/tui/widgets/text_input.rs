//! # Text Prompts
//!
//! Line-oriented inputs, deliberately NOT raw-mode widgets. The terminal's
//! own line editing applies; there is no keystroke interception and no
//! in-place editing. An empty first line means "use the default".

use std::io::{self, BufRead, Write, stdin, stdout};

use crossterm::style::Stylize;
use log::info;

use crate::tui::render;

/// Reads one line; an empty line returns the default verbatim.
pub fn read_line_from<R: BufRead>(reader: &mut R, default: &str) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let entered = line.trim_end_matches(['\r', '\n']);
    if entered.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(entered.to_string())
    }
}

/// Accumulates lines until an empty line follows at least one non-empty
/// line; the lines are joined with `\n`. An empty FIRST line returns the
/// default immediately, mirroring the single-line prompt.
pub fn read_multiline_from<R: BufRead>(reader: &mut R, default: &str) -> io::Result<String> {
    let mut collected: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        let entered = line.trim_end_matches(['\r', '\n']);
        if entered.is_empty() || read == 0 {
            if collected.is_empty() {
                return Ok(default.to_string());
            }
            return Ok(collected.join("\n"));
        }
        collected.push(entered.to_string());
    }
}

/// Single-line prompt against the real terminal.
pub fn prompt_line(title: &str, context: &[String], default: &str) -> io::Result<String> {
    draw_prompt(title, context, default)?;
    let value = read_line_from(&mut stdin().lock(), default)?;
    info!("{title}: {value:?}");
    Ok(value)
}

/// Multi-line prompt against the real terminal.
pub fn prompt_multiline(title: &str, context: &[String], default: &str) -> io::Result<String> {
    draw_prompt(title, context, default)?;
    let value = read_multiline_from(&mut stdin().lock(), default)?;
    info!("{title}: {} line(s)", value.lines().count());
    Ok(value)
}

fn draw_prompt(title: &str, context: &[String], default: &str) -> io::Result<()> {
    let body = vec![
        title.bold().to_string(),
        String::new(),
        format!("Finish with an empty line · blank uses the default ({default:?})")
            .dark_grey()
            .to_string(),
        String::new(),
    ];
    render::draw(context, &body)?;
    stdout().flush()
}
