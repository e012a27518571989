//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.scout/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::client::{DEFAULT_API_HOST, DEFAULT_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub key: Option<String>,
    pub host: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: Option<String>,
    pub api_host: String,
    pub base_url: String,
    pub data_dir: PathBuf,
}

impl ResolvedConfig {
    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join("players.json")
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.toml")
    }
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

/// Returns `~/.scout`.
pub fn scout_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scout"))
}

/// Returns the path to `~/.scout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    scout_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.scout/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ScoutConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ScoutConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ScoutConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ScoutConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ScoutConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ScoutConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // The key stays out of the log
    debug!(
        "Config: host={:?} base_url={:?} data_dir={:?} key_set={}",
        config.api.host,
        config.api.base_url,
        config.storage.data_dir,
        config.api.key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Scout Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# key = "your-rapidapi-key"          # Or set RAPIDAPI_KEY env var
# host = "football-manager-api.p.rapidapi.com"
# base_url = "https://football-manager-api.p.rapidapi.com"

# [storage]
# data_dir = "/home/me/.scout"       # Saved players and preferences
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` and `cli_data_dir` are from CLI flags (None = not specified).
pub fn resolve(
    config: &ScoutConfig,
    cli_base_url: Option<&str>,
    cli_data_dir: Option<&str>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_base_url, cli_data_dir, |name| {
        std::env::var(name).ok()
    })
}

/// `resolve` with the environment lookup passed in.
fn resolve_with_env(
    config: &ScoutConfig,
    cli_base_url: Option<&str>,
    cli_data_dir: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // API key: env → config
    let api_key = env("RAPIDAPI_KEY").or_else(|| config.api.key.clone());

    // Host header: env → config → default
    let api_host = env("RAPIDAPI_HOST")
        .or_else(|| config.api.host.clone())
        .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| env("SCOUT_API_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Data dir: CLI → env → config → ~/.scout → ./.scout
    let data_dir = cli_data_dir
        .map(PathBuf::from)
        .or_else(|| env("SCOUT_DATA_DIR").map(PathBuf::from))
        .or_else(|| config.storage.data_dir.as_ref().map(PathBuf::from))
        .or_else(scout_dir)
        .unwrap_or_else(|| PathBuf::from(".scout"));

    ResolvedConfig {
        api_key,
        api_host,
        base_url,
        data_dir,
    }
}
