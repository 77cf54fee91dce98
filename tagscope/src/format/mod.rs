use clap::ValueEnum;
use libtagscope::config::{self, ColorChoice};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable pretty format
    Pretty,
    /// JSON format
    Json,
    /// YAML format
    #[value(alias = "yml")]
    Yaml,
}

impl From<config::OutputFormat> for OutputFormat {
    fn from(format: config::OutputFormat) -> Self {
        match format {
            config::OutputFormat::Pretty => OutputFormat::Pretty,
            config::OutputFormat::Json => OutputFormat::Json,
            config::OutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Values accepted by `--color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

/// Decide whether stderr output gets colors
pub fn should_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Print an error message to stderr
pub fn error(choice: ColorChoice, message: &str) {
    eprintln!("{}", error_line(should_color(choice), message));
}

fn error_line(color: bool, message: &str) -> String {
    if color {
        format!("{} {}", "✗".red().bold(), message)
    } else {
        format!("✗ {}", message)
    }
}

/// Trait for types that can be formatted for CLI output
pub trait Formattable: Serialize {
    /// Format the type for pretty (human-readable) output
    fn format_pretty(&self) -> String;
}

/// Format a single item for output
pub fn format_output<T: Formattable>(item: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Ok(item.format_pretty()),
        OutputFormat::Json => serde_json::to_string_pretty(item)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => serde_yaml::to_string(item)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| format!("Failed to serialize to YAML: {}", e)),
    }
}
