//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.permsync/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::mode::Mode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PermsyncConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding `allowed.json` and `blacklist.json`.
    pub data_dir: Option<PathBuf>,
    pub start_mode: Option<Mode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "permsync.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub start_mode: Mode,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub start_mode: Option<Mode>,
    pub log_file: Option<PathBuf>,
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

/// Returns the path to `~/.permsync/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".permsync").join("config.toml"))
}

/// Where the loaded config came from.
///
/// Loading runs before the file logger is installed, so the loader reports
/// what it did through this value and the caller logs it afterwards with
/// [`ConfigSource::log`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File(PathBuf),
    /// No file existed; a commented-out default was written.
    Generated(PathBuf),
    /// No file existed and the default could not be written.
    GenerateFailed(PathBuf, String),
    /// No home directory, so there is no config path.
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed(path, error) => {
                warn!("Failed to write default config to {}: {}", path.display(), error)
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.permsync/config.toml`.
pub fn load_config() -> Result<(PermsyncConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((PermsyncConfig::default(), ConfigSource::NoHomeDir)),
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PermsyncConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<(PermsyncConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::GenerateFailed(path.to_path_buf(), e.to_string()),
        };
        return Ok((PermsyncConfig::default(), source));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PermsyncConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Permsync Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "/path/to/rules"   # Holds allowed.json and blacklist.json
#                               # Or set PERMSYNC_DIR; default is the binary's directory
# start_mode = "allowed"        # "allowed" or "blacklist"

# [logging]
# file = "permsync.log"
# level = "info"                # "off", "error", "warn", "info", "debug", "trace"
#                               # Or set PERMSYNC_LOG
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PermsyncConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Data dir: CLI → env → config → binary's directory
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var_os("PERMSYNC_DIR").map(PathBuf::from))
        .or_else(|| config.general.data_dir.clone())
        .unwrap_or_else(default_data_dir);

    // Start mode: CLI → config → default
    let start_mode = cli
        .start_mode
        .or(config.general.start_mode)
        .unwrap_or_default();

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default
    let log_level = std::env::var("PERMSYNC_LOG")
        .ok()
        .or_else(|| config.logging.level.clone())
        .map(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        data_dir,
        start_mode,
        log_file,
        log_level,
    }
}

/// The directory containing the running executable, else the working directory.
pub fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Unknown level names fall back to `DEFAULT_LOG_LEVEL`.
fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL)
}
