//! mlib-catalog configuration
//!
//! Each setting resolves in priority order:
//! 1. Command-line argument
//! 2. Environment variable (`MLIB_*`, via clap)
//! 3. TOML config file (`--config`, default `~/.config/mlib/config.toml`)
//! 4. Compiled default

use clap::Parser;
use mlib_common::config::{
    self as common_config, TomlConfig, DEFAULT_BIND_ADDRESS, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
    DEFAULT_SONG_INFO_TIMEOUT_SECS, DEFAULT_SONG_INFO_URL,
};
use mlib_common::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for mlib-catalog
#[derive(Parser, Debug, Default)]
#[command(name = "mlib-catalog")]
#[command(about = "Song catalog service")]
#[command(version)]
pub struct Args {
    /// TOML config file
    #[arg(short, long, env = "MLIB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, env = "MLIB_PORT")]
    pub port: Option<u16>,

    /// Address to bind to
    #[arg(long, env = "MLIB_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// SQLite database file
    #[arg(short, long, env = "MLIB_DATABASE")]
    pub database: Option<PathBuf>,

    /// Base URL of the song info service
    #[arg(long, env = "MLIB_SONG_INFO_URL")]
    pub song_info_url: Option<String>,

    /// Song info request timeout in seconds
    #[arg(long, env = "MLIB_SONG_INFO_TIMEOUT_SECS")]
    pub song_info_timeout_secs: Option<u64>,

    /// Log level or filter directive
    #[arg(long, env = "MLIB_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Config file to read: `--config` or the platform default
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(common_config::default_config_path)
    }
}

/// Resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_path: PathBuf,
    pub song_info_url: String,
    pub song_info_timeout: Duration,
    pub log_level: String,
}

impl Config {
    /// Merge arguments over the TOML file over compiled defaults
    pub fn resolve(args: Args, toml: TomlConfig) -> Result<Self> {
        let config = Self {
            port: args.port.or(toml.port).unwrap_or(DEFAULT_PORT),
            bind_address: args
                .bind_address
                .or(toml.bind_address)
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            database_path: args
                .database
                .or(toml.database_path)
                .unwrap_or_else(common_config::default_database_path),
            song_info_url: args
                .song_info_url
                .or(toml.song_info.base_url)
                .unwrap_or_else(|| DEFAULT_SONG_INFO_URL.to_string()),
            song_info_timeout: Duration::from_secs(
                args.song_info_timeout_secs
                    .or(toml.song_info.timeout_secs)
                    .unwrap_or(DEFAULT_SONG_INFO_TIMEOUT_SECS),
            ),
            log_level: args
                .log_level
                .or(toml.logging.level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::Config("port must be greater than 0".to_string()));
        }
        if self.song_info_timeout.is_zero() {
            return Err(Error::Config(
                "song info timeout must be greater than 0".to_string(),
            ));
        }
        if self.song_info_url.trim().is_empty() {
            return Err(Error::Config("song info URL must not be empty".to_string()));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| {
                Error::Config(format!(
                    "Invalid bind address {}:{}: {}",
                    self.bind_address, self.port, e
                ))
            })
    }
}
