//! Catalog configuration: where the posts document lives and how to fetch it.
//!
//! Values come from an optional YAML file and are then overridden by the
//! `BREAKDOWNS_SOURCE` and `BREAKDOWNS_TIMEOUT_SECS` environment variables.
//! Command-line flags passed to [`CatalogConfig::resolve`] win over both.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::error::BreakdownsError;

pub const DEFAULT_SOURCE: &str = "http://localhost:8080/posts.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const SOURCE_ENV: &str = "BREAKDOWNS_SOURCE";
pub const TIMEOUT_ENV: &str = "BREAKDOWNS_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Settings given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigFlags<'a> {
    pub config: Option<&'a Path>,
    pub source: Option<&'a str>,
    pub output: Option<&'a str>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// URL of the posts document, or a path to a local copy.
    pub source: String,
    pub timeout_secs: u64,
    /// Default output format for the CLI.
    pub output: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: "table".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parses YAML content. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml_content: &str) -> Result<Self, ConfigError> {
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CatalogConfig = serde_yml::from_str(yaml_content)?;
        config.validated()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Resolves the effective configuration: flags, then environment, then
    /// the config file, then defaults.
    pub fn resolve(flags: &ConfigFlags<'_>) -> Result<Self, BreakdownsError> {
        Self::resolve_with(flags, |key| std::env::var(key).ok())
    }

    fn resolve_with<F>(flags: &ConfigFlags<'_>, lookup: F) -> Result<Self, BreakdownsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match flags.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let mut config = base.with_overrides_from(lookup);
        if let Some(source) = flags.source {
            config.source = source.to_string();
        }
        if let Some(output) = flags.output {
            config.output = output.to_string();
        }
        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    /// Applies environment overrides. Unparseable or zero timeouts are ignored.
    fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(SOURCE_ENV).filter(|v| !v.trim().is_empty()) {
            self.source = source;
        }
        let timeout = lookup(TIMEOUT_ENV).and_then(|val| val.trim().parse::<u64>().ok());
        if let Some(timeout) = timeout.filter(|t| *t > 0) {
            self.timeout_secs = timeout;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }
}
