//! # Webhook Delivery
//!
//! Posts the release announcement to the team chat webhook. The address
//! lives in a local plaintext file so the secret stays out of the config
//! file and shell history. Delivery is fire-and-forget from the workflow's
//! perspective; the caller decides whether a failure matters.

pub mod payload;

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde_json::Value;

#[derive(Debug)]
pub enum NotifyError {
    /// Webhook address file missing, unreadable, or empty. Not retryable.
    Config(String),
    /// Network-level failure (DNS, refused connection, timeout).
    Network(String),
    /// The webhook endpoint answered with a non-success status.
    Api { status: u16 },
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Config(msg) => write!(f, "webhook config error: {msg}"),
            NotifyError::Network(msg) => write!(f, "webhook network error: {msg}"),
            NotifyError::Api { status } => write!(f, "webhook rejected (HTTP {status})"),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Reads the webhook address from its file collaborator, trimmed.
pub fn webhook_url(path: &Path) -> Result<String, NotifyError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| NotifyError::Config(format!("cannot read {}: {e}", path.display())))?;
    let url = raw.trim().to_string();
    if url.is_empty() {
        return Err(NotifyError::Config(format!("{} is empty", path.display())));
    }
    Ok(url)
}

/// POSTs the payload as JSON to the webhook address.
pub async fn send(url: &str, payload: &Value) -> Result<(), NotifyError> {
    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .map_err(|e| NotifyError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(NotifyError::Api { status: status.as_u16() });
    }
    info!("Webhook delivered (HTTP {status})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_webhook_url_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://hooks.example.test/T000/B000  ").unwrap();
        let url = webhook_url(file.path()).unwrap();
        assert_eq!(url, "https://hooks.example.test/T000/B000");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = webhook_url(Path::new("/nonexistent/webhook.txt")).unwrap_err();
        assert!(matches!(err, NotifyError::Config(_)));
    }

    #[test]
    fn test_blank_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        let err = webhook_url(file.path()).unwrap_err();
        assert!(matches!(err, NotifyError::Config(_)));
    }
}
