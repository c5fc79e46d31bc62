//! Shipit library exports for testing

pub mod core;
pub mod notify;
pub mod tui;
