//! Configuration management for the Tubingen format checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional project config file (`tubingen.toml`)
//!
//! Precedence: command line > project config > defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Project config file looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = "tubingen.toml";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Command-line arguments for the checker
#[derive(Debug, Parser)]
#[command(name = "tubingen-check")]
#[command(about = "Check that text files follow the Tubingen numeric-pair line format")]
#[command(version)]
pub struct Args {
    /// Folder containing the .txt files to check
    #[arg(conflicts_with = "file")]
    pub folder: Option<PathBuf>,

    /// Check a single file instead of a folder
    #[arg(long, help = "Validate one file and report its error count")]
    pub file: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, help = "Output format (human, json)")]
    pub output: Option<OutputFormat>,

    /// Log level for diagnostics on stderr
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    /// Explicit project config file
    #[arg(long, help = "Path to a tubingen.toml project config")]
    pub config: Option<PathBuf>,
}

/// Settings read from `tubingen.toml`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub folder: Option<PathBuf>,
    pub output: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl ProjectConfig {
    /// Load a project config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// What a run should check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Folder(PathBuf),
    File(PathBuf),
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub target: Target,
    pub output: OutputFormat,
    pub log_level: String,
    /// Project config file that was applied, if any
    pub project_config: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments and the working directory
    pub fn from_args_and_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::from_args(Args::parse(), &cwd)
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args, cwd: &Path) -> Result<Self> {
        let project_path = match args.config {
            Some(path) => Some(path),
            None => {
                let candidate = cwd.join(PROJECT_CONFIG_FILE);
                candidate.is_file().then_some(candidate)
            }
        };
        let project = match &project_path {
            Some(path) => ProjectConfig::load(path)?,
            None => ProjectConfig::default(),
        };

        let target = match (args.file, args.folder) {
            (Some(file), _) => Target::File(file),
            (None, Some(folder)) => Target::Folder(folder),
            (None, None) => Target::Folder(
                project
                    .folder
                    .map(|folder| resolve_relative(&project_path, cwd, folder))
                    .unwrap_or_else(|| cwd.to_path_buf()),
            ),
        };

        Ok(Config {
            target,
            output: args.output.or(project.output).unwrap_or_default(),
            log_level: args
                .log_level
                .or(project.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            project_config: project_path,
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config.is_some()
    }
}

/// Relative folders in a project config are relative to the config file
fn resolve_relative(project_path: &Option<PathBuf>, cwd: &Path, folder: PathBuf) -> PathBuf {
    if folder.is_absolute() {
        return folder;
    }
    let base = project_path
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(cwd);
    base.join(folder)
}
