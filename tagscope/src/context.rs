//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables (`TAGSCOPE_*`)
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::format::OutputFormat;
use libtagscope::config::ColorChoice;
use libtagscope::{Client, Config, Registry, TagResolver};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values given on the command line that win over the loaded configuration
#[derive(Debug, Default)]
pub struct Overrides {
    pub registry: Option<String>,
    pub timeout: Option<u64>,
    pub insecure: bool,
    pub color: Option<ColorChoice>,
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    ///
    /// An explicit `config_path` must exist; the default location is only
    /// read when present.
    pub fn build(config_path: Option<&Path>, overrides: Overrides) -> libtagscope::Result<Self> {
        let path = match config_path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };
        debug!(path = ?path, "loading configuration");

        let config = Config::load(path.as_deref())?;
        Ok(Self::from_config(config, overrides))
    }

    /// Applies CLI overrides on top of an already loaded configuration
    pub fn from_config(mut config: Config, overrides: Overrides) -> Self {
        if let Some(registry) = overrides.registry {
            config.registry.url = registry;
        }
        if let Some(timeout) = overrides.timeout {
            config.network.timeout = timeout;
        }
        if overrides.insecure {
            config.registry.insecure = true;
        }
        if let Some(color) = overrides.color {
            config.output.color = color;
        }

        Self { config }
    }

    /// Resolves the output format: the `--format` flag when given, else the
    /// configured default
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or_else(|| OutputFormat::from(self.config.output.format))
    }

    /// Creates a resolver for the configured registry
    pub fn resolver(&self) -> libtagscope::Result<TagResolver> {
        let registry = Registry::new(&self.config.registry.url)?;
        let client = Client::with_config(self.config.client_config())?;
        Ok(TagResolver::new(registry, client))
    }
}

/// Default configuration file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagscope").join("config.yaml"))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
