//! # Core Workflow Logic
//!
//! Everything the wizard knows that isn't terminal plumbing: configuration,
//! the accumulated release state, document composition, the external stage
//! invocations, and the orchestrator that sequences them. This module never
//! touches crossterm directly; widgets are invoked through `crate::tui`.
//!
//! ## Modules
//!
//! - [`config`]: `~/.shipit/config.toml` with defaults → file → env layering
//! - [`state`]: `Environment`, `BuildType`, `WorkflowState`
//! - [`notes`]: release-notes document and confirm summary composition
//! - [`git`]: best-effort branch/author lookup
//! - [`stages`]: build/upload subprocesses, output tee, share-URL extraction
//! - [`workflow`]: the fixed linear pipeline

pub mod config;
pub mod git;
pub mod notes;
pub mod stages;
pub mod state;
pub mod workflow;
