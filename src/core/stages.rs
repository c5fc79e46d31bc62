//! # Build & Upload Stages
//!
//! Subprocess invocations of the external build tool. The build stage runs
//! with inherited stdio; the upload stage tees its output: every line is
//! echoed to the operator as it arrives AND retained in a capture buffer for
//! the share-URL scan afterwards. Success is always the child's own exit
//! status, never an intermediate consumer's.

use std::fmt;
use std::process::Stdio;

use log::{info, warn};
use regex::Regex;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// The upload tool prints the shareable link on a line of this shape.
const SHARE_URL_PATTERN: &str = r"Share this release with testers who have access:\s*(\S+)";

#[derive(Debug)]
pub enum StageError {
    /// The external tool could not be started at all.
    Spawn { task: String, source: std::io::Error },
    /// The tool ran and exited non-zero.
    Failed { task: String, code: Option<i32> },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::Spawn { task, source } => {
                write!(f, "could not start stage {task}: {source}")
            }
            StageError::Failed { task, code: Some(code) } => {
                write!(f, "stage {task} failed with exit code {code}")
            }
            StageError::Failed { task, code: None } => {
                write!(f, "stage {task} was terminated by a signal")
            }
        }
    }
}

impl std::error::Error for StageError {}

/// Runs the assemble task; the operator watches its output live.
pub async fn run_build(command: &str, task: &str) -> Result<(), StageError> {
    info!("Running build stage: {command} {task}");
    let status = Command::new(command)
        .arg(task)
        .status()
        .await
        .map_err(|source| StageError::Spawn { task: task.to_string(), source })?;
    if !status.success() {
        return Err(StageError::Failed { task: task.to_string(), code: status.code() });
    }
    info!("Build stage {task} succeeded");
    Ok(())
}

/// Runs the upload task with the release notes and tester groups as named
/// parameters. Returns the captured combined stdout+stderr on success.
pub async fn run_upload(
    command: &str,
    task: &str,
    release_notes: &str,
    groups: &str,
) -> Result<String, StageError> {
    info!("Running upload stage: {command} {task} (groups: {groups})");
    let mut child = Command::new(command)
        .arg(task)
        .arg(format!("--releaseNotes={release_notes}"))
        .arg(format!("--groups={groups}"))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| StageError::Spawn { task: task.to_string(), source })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Tee both pipes while waiting on the child so neither side can stall.
    // The exit status comes from wait(), not from the echo loops.
    let (status, out, err) = tokio::join!(
        child.wait(),
        tee_lines(stdout, false),
        tee_lines(stderr, true),
    );

    let status = status.map_err(|source| StageError::Spawn { task: task.to_string(), source })?;
    let mut capture = out;
    capture.push_str(&err);

    if !status.success() {
        return Err(StageError::Failed { task: task.to_string(), code: status.code() });
    }
    info!("Upload stage {task} succeeded ({} captured bytes)", capture.len());
    Ok(capture)
}

/// Echoes each line live and appends it to the returned capture buffer.
async fn tee_lines<R: AsyncRead + Unpin>(pipe: Option<R>, to_stderr: bool) -> String {
    let mut capture = String::new();
    let Some(pipe) = pipe else {
        return capture;
    };
    let mut lines = BufReader::new(pipe).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if to_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
        capture.push_str(&line);
        capture.push('\n');
    }
    capture
}

/// Scans captured upload output for the share-URL marker line and extracts
/// the URL. Falls back to `fallback` when no marker is present.
pub fn extract_share_url(output: &str, fallback: &str) -> String {
    let pattern = Regex::new(SHARE_URL_PATTERN).expect("share-url pattern is valid");
    for line in output.lines() {
        if let Some(captures) = pattern.captures(line) {
            let url = captures[1].to_string();
            info!("Extracted release URL: {url}");
            return url;
        }
    }
    warn!("No share URL in upload output, using fallback {fallback}");
    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "https://appdistribution.firebase.dev";

    #[test]
    fn test_extracts_url_from_marker_line() {
        let output = "\
> Task :app:appDistributionUploadStageRelease
Uploading APK to Firebase App Distribution...
Share this release with testers who have access: https://example.test/xyz
Upload complete.
";
        assert_eq!(extract_share_url(output, FALLBACK), "https://example.test/xyz");
    }

    #[test]
    fn test_extraction_strips_trailing_carriage_return() {
        let output = "Share this release with testers who have access: https://example.test/xyz\r\n";
        assert_eq!(extract_share_url(output, FALLBACK), "https://example.test/xyz");
    }

    #[test]
    fn test_missing_marker_yields_fallback() {
        let output = "Upload complete.\nNo link today.\n";
        assert_eq!(extract_share_url(output, FALLBACK), FALLBACK);
    }

    #[test]
    fn test_marker_without_url_yields_fallback() {
        let output = "Share this release with testers who have access:\n";
        assert_eq!(extract_share_url(output, FALLBACK), FALLBACK);
    }

    #[tokio::test]
    async fn test_tee_lines_captures_all_output() {
        let data: &[u8] = b"line one\nline two\n";
        let capture = tee_lines(Some(data), false).await;
        assert_eq!(capture, "line one\nline two\n");
    }

    #[tokio::test]
    async fn test_run_build_reports_spawn_failure() {
        let err = run_build("/nonexistent/gradlew", "assembleUatDebug")
            .await
            .unwrap_err();
        match err {
            StageError::Spawn { task, .. } => assert_eq!(task, "assembleUatDebug"),
            other => panic!("expected spawn error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_run_build_propagates_nonzero_exit() {
        let err = run_build("false", "assembleUatDebug").await.unwrap_err();
        match err {
            StageError::Failed { code: Some(code), .. } => assert_ne!(code, 0),
            other => panic!("expected failed stage, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_run_upload_captures_child_output() {
        // `echo` ignores the task arguments and prints them back, which is
        // exactly what the capture should contain.
        let capture = run_upload("echo", "uploadTask", "notes", "qa").await.unwrap();
        assert!(capture.contains("uploadTask"));
        assert!(capture.contains("--groups=qa"));
    }
}
