//! # Workflow State
//!
//! Everything the wizard collects, threaded explicitly from step to step.
//!
//! ```text
//! WorkflowState
//! ├── environment: Environment   // Uat | Stage | Prod
//! ├── build_type: BuildType      // Debug | Release
//! ├── description: String        // possibly multi-line, defaulted if empty
//! ├── groups: String             // comma-joined tester groups
//! ├── branch: String             // "unknown" when git lookup fails
//! ├── author: String             // "Unknown Author" when git lookup fails
//! └── release_url: String        // extracted from upload output, or fallback
//! ```
//!
//! Each field is written by exactly one workflow step; there is no shared
//! "last result" side channel.

use std::fmt;

/// Deployment environment for the release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Uat,
    Stage,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Uat, Environment::Stage, Environment::Prod];

    pub fn label(&self) -> &'static str {
        match self {
            Environment::Uat => "Uat",
            Environment::Stage => "Stage",
            Environment::Prod => "Prod",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.label() == label)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build flavor within an environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub const ALL: [BuildType; 2] = [BuildType::Debug, BuildType::Release];

    pub fn label(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated release metadata. Created once per run, discarded at exit.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub environment: Environment,
    pub build_type: BuildType,
    pub description: String,
    pub groups: String,
    pub branch: String,
    pub author: String,
    pub release_url: String,
}

impl WorkflowState {
    /// Stage/task name: environment and build type concatenated, e.g.
    /// `"UatDebug"`. Both external stages are addressed by this name.
    pub fn stage_name(&self) -> String {
        format!("{}{}", self.environment, self.build_type)
    }
}
