//! Configuration management for authlink.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::identity::ConnectionParams;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQL datastore used by the credential store.
    pub datastore: DatastoreSection,
    /// Session cache used by the session authority.
    pub session_cache: SessionCacheSection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Datastore connection section.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatastoreSection {
    pub host: String,
    pub login: String,
    pub password: String,
}

impl Default for DatastoreSection {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            login: "sqluser".to_string(),
            password: "hunter2".to_string(),
        }
    }
}

impl DatastoreSection {
    pub fn to_params(&self) -> ConnectionParams {
        ConnectionParams::new(&self.host, &self.login, &self.password)
    }

    fn apply_env(&mut self) {
        override_from_env(&mut self.host, "AUTHLINK_DB_HOST");
        override_from_env(&mut self.login, "AUTHLINK_DB_LOGIN");
        override_from_env(&mut self.password, "AUTHLINK_DB_PASSWORD");
    }
}

impl std::fmt::Debug for DatastoreSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatastoreSection")
            .field("host", &self.host)
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

/// Session cache connection section.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionCacheSection {
    pub host: String,
    pub login: String,
    pub password: String,
}

impl Default for SessionCacheSection {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            login: "redisuser".to_string(),
            password: "hunter2".to_string(),
        }
    }
}

impl SessionCacheSection {
    pub fn to_params(&self) -> ConnectionParams {
        ConnectionParams::new(&self.host, &self.login, &self.password)
    }

    fn apply_env(&mut self) {
        override_from_env(&mut self.host, "AUTHLINK_CACHE_HOST");
        override_from_env(&mut self.login, "AUTHLINK_CACHE_LOGIN");
        override_from_env(&mut self.password, "AUTHLINK_CACHE_PASSWORD");
    }
}

impl std::fmt::Debug for SessionCacheSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCacheSection")
            .field("host", &self.host)
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

fn override_from_env(field: &mut String, var: &str) {
    if let Ok(value) = std::env::var(var) {
        *field = value;
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.datastore.apply_env();
        self.session_cache.apply_env();

        if let Ok(level) = std::env::var("AUTHLINK_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ref host) = args.db_host {
            self.datastore.host = host.clone();
        }
        if let Some(ref login) = args.db_login {
            self.datastore.login = login.clone();
        }
        if let Some(ref password) = args.db_password {
            self.datastore.password = password.clone();
        }
        if let Some(ref host) = args.cache_host {
            self.session_cache.host = host.clone();
        }
        if let Some(ref login) = args.cache_login {
            self.session_cache.login = login.clone();
        }
        if let Some(ref password) = args.cache_password {
            self.session_cache.password = password.clone();
        }
        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match args.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env();
        config.apply_args(args);

        Ok(config)
    }

    /// Check that every backing store has a host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.datastore.host.trim().is_empty() {
            return Err(ConfigError::MissingValue("datastore.host"));
        }
        if self.session_cache.host.trim().is_empty() {
            return Err(ConfigError::MissingValue("session_cache.host"));
        }
        Ok(())
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// Required value is empty.
    MissingValue(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::MissingValue(name) => write!(f, "missing configuration value: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}
