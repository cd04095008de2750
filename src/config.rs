//! Configuration management for md2mmd.
//!
//! Handles:
//! - Command-line argument parsing
//! - User-global and project config files
//!
//! Priority: command line > project `.md2mmd.toml` > user config > defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;

use crate::core::ConvertOptions;
use crate::core::document::DEFAULT_SUFFIX;

/// Project config file looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = ".md2mmd.toml";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "md2mmd")]
#[command(about = "Convert PlantUML and Graphviz/DOT diagrams in Markdown to Mermaid")]
#[command(version)]
pub struct Args {
    /// Markdown file to convert
    #[arg(help = "Markdown (.md) file to convert")]
    pub input: PathBuf,

    /// Explicit output path
    #[arg(short, long, help = "Write the result here instead of <stem>.<suffix>")]
    pub output: Option<PathBuf>,

    /// Output file suffix
    #[arg(long, help = "Suffix of the generated file name (default: mmd.md)")]
    pub suffix: Option<String>,

    /// Print the converted document instead of writing it
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Contents of a TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub suffix: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigFile {
    /// Load a config file, `None` if it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(Some(file))
    }

    /// Fill unset fields from a lower priority file
    fn or(self, fallback: Self) -> Self {
        Self {
            suffix: self.suffix.or(fallback.suffix),
            log_level: self.log_level.or(fallback.log_level),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub suffix: String,
    pub stdout: bool,
    pub json: bool,
    pub log_level: String,
    /// Config files that were found and applied
    pub config_files: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from parsed arguments and the default config files
    pub fn from_args_and_env(args: Args) -> Result<Self> {
        Self::from_args_with_files(args, &default_config_files()?)
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_args_with_files(args, &[])
    }

    /// Create configuration from arguments and config files listed from
    /// lowest to highest priority
    pub fn from_args_with_files(args: Args, files: &[PathBuf]) -> Result<Self> {
        let mut merged = ConfigFile::default();
        let mut config_files = Vec::new();

        for path in files {
            if let Some(file) = ConfigFile::load(path)? {
                merged = file.or(merged);
                config_files.push(path.clone());
            }
        }

        let suffix = normalize_suffix(
            args.suffix
                .or(merged.suffix)
                .as_deref()
                .unwrap_or(DEFAULT_SUFFIX),
        )?;

        Ok(Config {
            input: args.input,
            output: args.output,
            suffix,
            stdout: args.stdout,
            json: args.json,
            log_level: args
                .log_level
                .or(merged.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_files,
        })
    }

    /// Options for the document converter
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            suffix: self.suffix.clone(),
            output: self.output.clone(),
        }
    }
}

/// Config file locations, lowest priority first
pub fn default_config_files() -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    // User global file: ~/.config/md2mmd/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        files.push(config_dir.join("md2mmd").join("config.toml"));
    }

    // Project file: ./.md2mmd.toml
    files.push(std::env::current_dir()?.join(PROJECT_CONFIG_FILE));

    Ok(files)
}

/// Strip leading dots and reject suffixes that would escape the input directory
fn normalize_suffix(suffix: &str) -> Result<String> {
    let trimmed = suffix.trim_start_matches('.');
    if trimmed.is_empty() {
        bail!("Output suffix must not be empty");
    }
    if trimmed.contains(['/', '\\']) {
        bail!("Output suffix must not contain a path separator: {}", suffix);
    }
    Ok(trimmed.to_string())
}
