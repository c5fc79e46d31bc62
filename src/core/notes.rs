//! # Release Notes & Summary
//!
//! Pure composition of the two operator-facing documents: the notes text
//! handed to the upload stage and the summary shown in the confirm dialog.

use crate::core::state::WorkflowState;

/// The release-notes document passed to the distribution upload.
pub fn release_notes(state: &WorkflowState) -> String {
    format!(
        "Environment: {}\nBranch: {}\nAuthor: {}\nGroups: {}\n\n{}",
        state.stage_name(),
        state.branch,
        state.author,
        state.groups,
        state.description,
    )
}

/// Labeled summary lines for the confirm dialog.
pub fn confirm_summary(state: &WorkflowState) -> Vec<String> {
    let mut lines = vec![
        "About to build and distribute:".to_string(),
        String::new(),
        format!("  Environment:  {}", state.environment),
        format!("  Build type:   {}", state.build_type),
        format!("  Branch:       {}", state.branch),
        format!("  Author:       {}", state.author),
        format!("  Groups:       {}", state.groups),
        "  Description:".to_string(),
    ];
    lines.extend(state.description.lines().map(|line| format!("    {line}")));
    lines
}

/// First line of a possibly multi-line text, marked with an ellipsis when
/// more lines follow. Used for the context shown to later widgets.
pub fn first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((first, _)) => format!("{first} …"),
        None => text.to_string(),
    }
}
