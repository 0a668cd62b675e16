//! Bootstrap configuration and compiled defaults
//!
//! Services resolve each setting in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! The first two tiers belong to each binary's argument parser. This module
//! owns the TOML file model and the compiled defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8084;

/// Default bind address (all interfaces)
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default song info provider base URL
pub const DEFAULT_SONG_INFO_URL: &str = "http://localhost:8080";

/// Default song info request timeout in seconds
pub const DEFAULT_SONG_INFO_TIMEOUT_SECS: u64 = 10;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Database file name used when no path is configured
pub const DEFAULT_DATABASE_FILE: &str = "mlib.db";

/// Configuration file contents
///
/// Every field is optional: anything left out falls through to the compiled
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TomlConfig {
    /// HTTP server port
    pub port: Option<u16>,

    /// Address the HTTP server binds to
    pub bind_address: Option<String>,

    /// Path to the SQLite database file
    pub database_path: Option<PathBuf>,

    /// External song info provider
    #[serde(default)]
    pub song_info: SongInfoConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Song info provider section (`[song_info]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SongInfoConfig {
    /// Base URL; requests go to `{base_url}/info`
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Logging section (`[logging]`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: Option<String>,
}

/// Load a TOML config file
///
/// Returns `Ok(None)` if the file does not exist. A missing config file is
/// not an error; the caller logs a warning and continues with defaults.
/// A file that exists but cannot be read or parsed is an error.
pub fn load_toml_config(path: &Path) -> Result<Option<TomlConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| {
        Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e))
    })?;

    Ok(Some(config))
}

/// Default config file location (`~/.config/mlib/config.toml` on Linux)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("mlib").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("mlib.toml"))
}

/// Default database location (`~/.local/share/mlib/mlib.db` on Linux)
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("mlib").join(DEFAULT_DATABASE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
}
