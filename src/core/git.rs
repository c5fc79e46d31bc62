//! # Version Control Metadata
//!
//! Best-effort lookups of the current branch and configured author. A
//! missing repository, missing git binary, or empty answer degrades to a
//! placeholder string; release metadata is nice to have, never fatal.

use std::process::Command;

use log::warn;

pub const UNKNOWN_BRANCH: &str = "unknown";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Current branch name, or `"unknown"`.
pub fn branch() -> String {
    read_git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| {
        warn!("Could not determine git branch, using placeholder");
        UNKNOWN_BRANCH.to_string()
    })
}

/// Configured author name, or `"Unknown Author"`.
pub fn author() -> String {
    read_git(&["config", "user.name"]).unwrap_or_else(|| {
        warn!("Could not determine git author, using placeholder");
        UNKNOWN_AUTHOR.to_string()
    })
}

fn read_git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    clean(output.stdout)
}

/// Trims the subprocess answer; whitespace-only output counts as absent.
fn clean(stdout: Vec<u8>) -> Option<String> {
    let value = String::from_utf8(stdout).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims_trailing_newline() {
        assert_eq!(clean(b"feature/login\n".to_vec()).as_deref(), Some("feature/login"));
    }

    #[test]
    fn test_clean_rejects_empty_output() {
        assert_eq!(clean(b"\n".to_vec()), None);
        assert_eq!(clean(Vec::new()), None);
    }

    #[test]
    fn test_clean_rejects_invalid_utf8() {
        assert_eq!(clean(vec![0xff, 0xfe]), None);
    }
}
