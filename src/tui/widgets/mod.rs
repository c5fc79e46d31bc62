//! # Widget Library
//!
//! The five interactive prompts the wizard sequences: single-select,
//! multi-select, confirm, and the two line-oriented text inputs. Each
//! raw-mode widget follows the same pattern: a plain state struct with a
//! pure `handle_key` transition, plus a `run_*` loop that owns the
//! [`TerminalGuard`](super::TerminalGuard) and redraws after every key.

pub mod confirm;
pub mod multi_select;
pub mod select;
pub mod text_input;
