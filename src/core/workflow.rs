//! # Workflow Orchestrator
//!
//! The fixed linear pipeline: four prompts, git metadata, a confirm gate,
//! the two build-tool stages, then the chat notification. State is threaded
//! explicitly: each step returns a value the next step consumes.

use std::fmt;
use std::fs;
use std::path::Path;

use crossterm::style::Stylize;
use log::{info, warn};

use crate::core::config::ResolvedConfig;
use crate::core::state::{BuildType, Environment, WorkflowState};
use crate::core::{git, notes, stages};
use crate::notify;
use crate::tui::widgets::{confirm, multi_select, select, text_input};

/// How a run ended. Both variants are exit code 0; stage failures surface
/// as [`WorkflowError`] instead.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

#[derive(Debug)]
pub enum WorkflowError {
    Io(std::io::Error),
    Stage(stages::StageError),
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::Io(e) => write!(f, "terminal I/O error: {e}"),
            WorkflowError::Stage(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for WorkflowError {}

impl From<std::io::Error> for WorkflowError {
    fn from(e: std::io::Error) -> Self {
        WorkflowError::Io(e)
    }
}

impl From<stages::StageError> for WorkflowError {
    fn from(e: stages::StageError) -> Self {
        WorkflowError::Stage(e)
    }
}

/// Runs the wizard end to end.
pub async fn run(
    config: &ResolvedConfig,
    notes_out: Option<&Path>,
) -> Result<Outcome, WorkflowError> {
    let mut context: Vec<String> = Vec::new();

    // Steps 1–2: environment and build type
    let env_labels: Vec<&str> = Environment::ALL.iter().map(|e| e.label()).collect();
    let env_label = select::run_select("Select environment", &context, &env_labels)?;
    let environment = Environment::from_label(&env_label).unwrap_or(Environment::Uat);
    context.push(format!("Environment: {environment}"));

    let type_labels: Vec<&str> = BuildType::ALL.iter().map(|b| b.label()).collect();
    let type_label = select::run_select("Select build type", &context, &type_labels)?;
    let build_type = BuildType::from_label(&type_label).unwrap_or(BuildType::Debug);
    context.push(format!("Build type: {build_type}"));

    // Step 3: description (multi-line, defaulted)
    let description = text_input::prompt_multiline(
        "Release description",
        &context,
        &config.default_description,
    )?;
    context.push(format!("Description: {}", notes::first_line(&description)));

    // Step 4: tester groups
    let groups = multi_select::run_multi_select(
        "Select tester groups",
        &context,
        &config.tester_groups,
    )?;

    // Step 5: version-control metadata, degraded on failure
    let mut state = WorkflowState {
        environment,
        build_type,
        description,
        groups,
        branch: git::branch(),
        author: git::author(),
        release_url: String::new(),
    };

    // Steps 6–7: compose documents, confirm
    let release_notes = notes::release_notes(&state);
    let summary = notes::confirm_summary(&state);
    // The summary already repeats every collected field, so no extra context
    if confirm::run_confirm(&summary, &[])? != "yes" {
        info!("Operator cancelled at confirm step");
        println!("{}", "Release cancelled. Nothing was built.".yellow());
        return Ok(Outcome::Cancelled);
    }

    if let Some(path) = notes_out {
        // Audit copy only; the upload stage gets the notes as a parameter
        if let Err(e) = fs::write(path, &release_notes) {
            warn!("Could not write notes to {}: {e}", path.display());
        }
    }

    // Step 8: build
    let stage_name = state.stage_name();
    let assemble_task = format!("{}{stage_name}", config.assemble_prefix);
    println!("{}", format!("▸ Building {assemble_task}…").bold());
    stages::run_build(&config.build_command, &assemble_task).await?;

    // Steps 9–10: upload with tee'd output, then URL extraction
    let upload_task = format!("{}{stage_name}", config.upload_prefix);
    println!("{}", format!("▸ Uploading via {upload_task}…").bold());
    let captured = stages::run_upload(
        &config.build_command,
        &upload_task,
        &release_notes,
        &state.groups,
    )
    .await?;
    state.release_url = stages::extract_share_url(&captured, &config.fallback_url);

    // Step 11: chat notification, log-and-continue on failure, the release
    // itself already succeeded
    let payload = notify::payload::build(&state);
    match notify::webhook_url(&config.webhook_url_file) {
        Ok(url) => match notify::send(&url, &payload).await {
            Ok(()) => println!("{}", "✓ Team notified".green()),
            Err(e) => {
                warn!("Webhook delivery failed: {e}");
                println!("{}", format!("⚠ Webhook delivery failed: {e}").yellow());
            }
        },
        Err(e) => {
            warn!("Webhook address unavailable: {e}");
            println!("{}", format!("⚠ Skipping notification: {e}").yellow());
        }
    }

    println!(
        "{}",
        format!("✓ {stage_name} released: {}", state.release_url).green()
    );
    Ok(Outcome::Completed)
}
