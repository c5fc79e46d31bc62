//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shipit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShipitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_description: Option<String>,
    pub tester_groups: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BuildConfig {
    pub command: Option<String>,
    pub assemble_prefix: Option<String>,
    pub upload_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotifyConfig {
    pub webhook_url_file: Option<String>,
    pub fallback_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DESCRIPTION: &str = "Regular release build";
pub const DEFAULT_TESTER_GROUPS: &[&str] = &["qa", "qa-team", "devs"];
pub const DEFAULT_BUILD_COMMAND: &str = "./gradlew";
pub const DEFAULT_ASSEMBLE_PREFIX: &str = "assemble";
pub const DEFAULT_UPLOAD_PREFIX: &str = "appDistributionUpload";
pub const DEFAULT_FALLBACK_URL: &str = "https://appdistribution.firebase.dev";
const DEFAULT_WEBHOOK_URL_FILE: &str = "webhook.txt"; // relative to ~/.shipit/

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_description: String,
    pub tester_groups: Vec<String>,
    pub build_command: String,
    pub assemble_prefix: String,
    pub upload_prefix: String,
    pub webhook_url_file: PathBuf,
    pub fallback_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the `~/.shipit` directory.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shipit"))
}

/// Returns the path to `~/.shipit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `override_path`, or `~/.shipit/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShipitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(override_path: Option<&Path>) -> Result<ShipitConfig, ConfigError> {
    let path = match override_path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShipitConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShipitConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShipitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Shipit Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_description = "Regular release build"
# tester_groups = ["qa", "qa-team", "devs"]

# [build]
# command = "./gradlew"                      # Or set SHIPIT_BUILD_COMMAND
# assemble_prefix = "assemble"               # assembleUatDebug, assembleProdRelease, ...
# upload_prefix = "appDistributionUpload"    # appDistributionUploadUatDebug, ...

# [notify]
# webhook_url_file = "webhook.txt"           # Relative paths resolve against ~/.shipit/
# fallback_url = "https://appdistribution.firebase.dev"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &ShipitConfig) -> ResolvedConfig {
    // Build command: env → config → default
    let build_command = std::env::var("SHIPIT_BUILD_COMMAND")
        .ok()
        .or_else(|| config.build.command.clone())
        .unwrap_or_else(|| DEFAULT_BUILD_COMMAND.to_string());

    // Webhook address file: env → config → default, relative to ~/.shipit/
    let webhook_url_file = std::env::var("SHIPIT_WEBHOOK_URL_FILE")
        .ok()
        .or_else(|| config.notify.webhook_url_file.clone())
        .unwrap_or_else(|| DEFAULT_WEBHOOK_URL_FILE.to_string());
    let webhook_url_file = resolve_against_config_dir(PathBuf::from(webhook_url_file));

    let tester_groups = config
        .general
        .tester_groups
        .clone()
        .filter(|groups| !groups.is_empty())
        .unwrap_or_else(|| DEFAULT_TESTER_GROUPS.iter().map(|s| s.to_string()).collect());

    ResolvedConfig {
        default_description: config
            .general
            .default_description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        tester_groups,
        build_command,
        assemble_prefix: config
            .build
            .assemble_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_ASSEMBLE_PREFIX.to_string()),
        upload_prefix: config
            .build
            .upload_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_UPLOAD_PREFIX.to_string()),
        webhook_url_file,
        fallback_url: config
            .notify
            .fallback_url
            .clone()
            .unwrap_or_else(|| DEFAULT_FALLBACK_URL.to_string()),
    }
}

/// Relative paths resolve against `~/.shipit/`; absolute paths pass through.
fn resolve_against_config_dir(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ShipitConfig::default();
        assert!(config.general.tester_groups.is_none());
        assert!(config.build.command.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&ShipitConfig::default());
        assert_eq!(resolved.default_description, DEFAULT_DESCRIPTION);
        assert_eq!(resolved.tester_groups, vec!["qa", "qa-team", "devs"]);
        assert_eq!(resolved.build_command, DEFAULT_BUILD_COMMAND);
        assert_eq!(resolved.assemble_prefix, "assemble");
        assert_eq!(resolved.upload_prefix, "appDistributionUpload");
        assert_eq!(resolved.fallback_url, DEFAULT_FALLBACK_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ShipitConfig {
            general: GeneralConfig {
                default_description: Some("Nightly build".to_string()),
                tester_groups: Some(vec!["internal".to_string()]),
            },
            build: BuildConfig {
                command: Some("make".to_string()),
                assemble_prefix: Some("build".to_string()),
                upload_prefix: Some("publish".to_string()),
            },
            notify: NotifyConfig {
                webhook_url_file: Some("/etc/shipit/hook".to_string()),
                fallback_url: Some("https://releases.example.test".to_string()),
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.default_description, "Nightly build");
        assert_eq!(resolved.tester_groups, vec!["internal"]);
        assert_eq!(resolved.build_command, "make");
        assert_eq!(resolved.assemble_prefix, "build");
        assert_eq!(resolved.upload_prefix, "publish");
        assert_eq!(resolved.webhook_url_file, PathBuf::from("/etc/shipit/hook"));
        assert_eq!(resolved.fallback_url, "https://releases.example.test");
    }

    #[test]
    fn test_empty_group_list_falls_back_to_defaults() {
        let config = ShipitConfig {
            general: GeneralConfig {
                tester_groups: Some(Vec::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.tester_groups, vec!["qa", "qa-team", "devs"]);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[build]
command = "./gradlew.bat"
"#;
        let config: ShipitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.build.command.as_deref(), Some("./gradlew.bat"));
        assert!(config.general.default_description.is_none());
        assert!(config.notify.fallback_url.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_description = "Weekly QA drop"
tester_groups = ["qa", "design"]

[build]
command = "./gradlew"
upload_prefix = "appDistributionUpload"

[notify]
webhook_url_file = "hooks/release.txt"
fallback_url = "https://example.test/app"
"#;
        let config: ShipitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_description.as_deref(), Some("Weekly QA drop"));
        assert_eq!(
            config.general.tester_groups.as_deref(),
            Some(&["qa".to_string(), "design".to_string()][..])
        );
        assert_eq!(config.notify.webhook_url_file.as_deref(), Some("hooks/release.txt"));
    }

    #[test]
    fn test_absolute_webhook_path_passes_through() {
        let resolved = resolve_against_config_dir(PathBuf::from("/tmp/hook.txt"));
        assert_eq!(resolved, PathBuf::from("/tmp/hook.txt"));
    }

    #[test]
    fn test_load_config_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = load_config(Some(&path)).unwrap();
        assert!(config.general.default_description.is_none());
        // The generated template is fully commented out and stays parseable
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [general]"));
        let reparsed: ShipitConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.build.command.is_none());
    }

    #[test]
    fn test_load_config_malformed_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid = [toml").unwrap();
        match load_config(Some(&path)) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
