//! Configuration loading and database path resolution
//!
//! Bootstrap settings only (database location, port, log level). Sources in
//! priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing or malformed config file never aborts startup: it is logged and
//! the remaining sources are used.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming the SQLite database file
pub const DATABASE_ENV_VAR: &str = "PAPER_TRACKER_DB";

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "PAPER_TRACKER_CONFIG";

/// Port used when neither CLI, environment nor config file sets one
pub const DEFAULT_PORT: u16 = 5000;

const APP_DIR: &str = "paper-tracker";
const DATABASE_FILE: &str = "papers.db";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load config from an explicit path, `PAPER_TRACKER_CONFIG`, or the
    /// platform default location, falling back to defaults on any failure.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var(CONFIG_ENV_VAR)
                .ok()
                .map(PathBuf::from)
                .or_else(default_config_path),
        };

        let Some(path) = path else {
            debug!("No config file location available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                debug!("Loaded config file {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Resolved bootstrap configuration for the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_path: PathBuf,
    pub port: u16,
    pub log_level: String,
}

impl ServiceConfig {
    /// Merge command-line values with environment, TOML and defaults.
    ///
    /// `cli_port` is expected to already carry the `PORT` environment
    /// variable when clap resolved it from there.
    pub fn resolve(cli_database: Option<&Path>, cli_port: Option<u16>, toml: &TomlConfig) -> Self {
        Self {
            database_path: resolve_database_path(cli_database, toml),
            port: cli_port.or(toml.port).unwrap_or(DEFAULT_PORT),
            log_level: toml.logging.level.clone(),
        }
    }
}

/// Database path resolution: CLI → `PAPER_TRACKER_DB` → TOML → default
pub fn resolve_database_path(cli_arg: Option<&Path>, toml: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &toml.database_path {
        return path.clone();
    }

    // Priority 4: OS-dependent compiled default
    default_database_path()
}

/// Default configuration file path for the platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// OS-dependent default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("./paper_tracker_data"))
        .join(DATABASE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            database_path = "/srv/papers/papers.db"
            port = 8080

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.database_path, Some(PathBuf::from("/srv/papers/papers.db")));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.database_path.is_none());
        assert!(config.port.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_resolve_without_config_file_logs_at_info() {
        let config = ServiceConfig::resolve(
            Some(Path::new("/tmp/papers.db")),
            None,
            &TomlConfig::default(),
        );
        assert_eq!(config.log_level, "info");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_parse_invalid_config_is_config_error() {
        let err = TomlConfig::from_toml_str("port = \"not a number\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_default_database_path_ends_with_file_name() {
        let path = default_database_path();
        assert!(path.ends_with("paper-tracker/papers.db") || path.ends_with("paper_tracker_data/papers.db"));
    }
}
