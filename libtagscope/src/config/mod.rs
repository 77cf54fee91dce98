//! Application configuration.
//!
//! This module manages configuration with sensible defaults, loading from an
//! optional YAML file and merging with `TAGSCOPE_`-prefixed environment
//! variables (nested keys separated by `__`, e.g. `TAGSCOPE_NETWORK__TIMEOUT`).

use crate::client::ClientConfig;
use crate::error::{Result, TagscopeError};
use config::{Config as ConfigRs, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
mod tests;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TAGSCOPE";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: Registry,
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub output: Output,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder)
    }

    /// Loads a `Config` from an optional file path, then applies environment
    /// overrides from the process environment.
    ///
    /// A `path` that does not exist is an error; pass `None` to skip the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], reading overrides from `env` instead of the
    /// process environment when it is given.
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = Self::defaults()?;

        if let Some(p) = path {
            if !p.exists() {
                return Err(TagscopeError::config(
                    "Configuration file not found".to_string(),
                    Some(p.display().to_string()),
                ));
            }
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        Self::from_builder(builder).map_err(|e| match (e, path) {
            (
                TagscopeError::Config {
                    message,
                    path: None,
                    source,
                },
                Some(p),
            ) => TagscopeError::Config {
                message,
                path: Some(p.display().to_string()),
                source,
            },
            (e, _) => e,
        })
    }

    /// Returns the HTTP client settings this configuration describes.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_timeout(self.network.timeout)
            .with_max_idle_per_host(self.network.max_idle_per_host)
            .with_insecure(self.registry.insecure)
    }

    /// Starts a builder seeded with default values.
    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = ConfigRs::try_from(&Config::default()).map_err(|e| {
            TagscopeError::config_with_source("Failed to seed default configuration", None::<String>, e)
        })?;
        Ok(ConfigRs::builder().add_source(defaults))
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                TagscopeError::config_with_source(
                    "Failed to deserialize configuration",
                    None::<String>,
                    e,
                )
            })
    }
}

/// Registry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registry {
    #[serde(default = "default_registry_url")]
    pub url: String,

    /// Accept invalid TLS certificates
    #[serde(default)]
    pub insecure: bool,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            insecure: false,
        }
    }
}

fn default_registry_url() -> String {
    "http://localhost:5000".to_string()
}

/// Network settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    /// Request timeout in seconds
    #[serde(default = "default_network_timeout")]
    pub timeout: u64,

    #[serde(default = "default_max_idle_per_host")]
    pub max_idle_per_host: usize,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            timeout: default_network_timeout(),
            max_idle_per_host: default_max_idle_per_host(),
        }
    }
}

fn default_network_timeout() -> u64 {
    30
}

fn default_max_idle_per_host() -> usize {
    10
}

/// Output formatting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Output {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorChoice,
}

/// Enum for output formats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,

    Json,

    Yaml,
}

/// Enum for color output choices.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,

    Always,

    Never,
}
