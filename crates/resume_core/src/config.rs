//! Runtime configuration for persistence hosts.
//!
//! # Responsibility
//! - Resolve database path, storage key, export file name and logging
//!   settings from defaults, a `.env` file and `RESUME_*` variables.
//!
//! # Invariants
//! - Blank environment values are ignored, never applied.
//! - The default database lives in the per-user data directory.
//! - A validated config always has a non-blank storage key and a supported
//!   log level.

use crate::logging::{default_log_level, normalize_level};
use crate::store::snapshot::DEFAULT_EXPORT_FILE_NAME;
use directories::ProjectDirs;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Storage key documents are saved under unless overridden.
pub const DEFAULT_STORAGE_KEY: &str = "resume-builder-storage";
pub const DEFAULT_DB_FILE_NAME: &str = "resume_builder.sqlite3";

/// Prefix of recognised environment variables (`RESUME_DB_PATH`, ...).
pub const ENV_PREFIX: &str = "RESUME";

/// Invalid or unreadable configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Environment values could not be read into the expected shape.
    Load(::config::ConfigError),
    BlankStorageKey,
    UnsupportedLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "cannot read configuration: {err}"),
            Self::BlankStorageKey => write!(f, "storage key cannot be blank"),
            Self::UnsupportedLogLevel(level) => write!(f, "unsupported log level `{level}`"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<::config::ConfigError> for ConfigError {
    fn from(value: ::config::ConfigError) -> Self {
        Self::Load(value)
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub storage_key: String,
    pub export_file_name: String,
    pub log_level: String,
    /// File logging is off when unset.
    pub log_dir: Option<PathBuf>,
}

/// Values the environment may override; field names are the lowercased
/// variable names without the prefix.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvOverrides {
    db_path: Option<String>,
    storage_key: Option<String>,
    log_level: Option<String>,
    log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `.env` (when present) and `RESUME_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(None)
    }

    /// Defaults overlaid with `RESUME_*` entries of `vars` instead of the
    /// process environment.
    pub fn from_vars(vars: ::config::Map<String, String>) -> Result<Self, ConfigError> {
        Self::from_environment(Some(vars))
    }

    fn from_environment(vars: Option<::config::Map<String, String>>) -> Result<Self, ConfigError> {
        let overrides: EnvOverrides = ::config::Config::builder()
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;
        Ok(Self::default().overlay(overrides))
    }

    fn overlay(mut self, overrides: EnvOverrides) -> Self {
        let non_blank = |value: Option<String>| {
            value
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(path) = non_blank(overrides.db_path) {
            self.db_path = PathBuf::from(path);
        }
        if let Some(key) = non_blank(overrides.storage_key) {
            self.storage_key = key;
        }
        if let Some(level) = non_blank(overrides.log_level) {
            self.log_level = level;
        }
        if let Some(dir) = non_blank(overrides.log_dir) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::BlankStorageKey);
        }
        normalize_level(&self.log_level)
            .map_err(|_| ConfigError::UnsupportedLogLevel(self.log_level.clone()))?;
        Ok(())
    }
}

/// `<data dir>/resume_builder.sqlite3`, or the working directory when the
/// platform reports no home.
pub fn default_db_path() -> PathBuf {
    ProjectDirs::from("com", "resume-builder", "ResumeBuilder")
        .map(|dirs| dirs.data_dir().join(DEFAULT_DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME))
}
