//! Configuration for the logbook command
//!
//! This module provides the command-line configuration: the repository to
//! read, where the template and stylesheet live, where pages are written, and
//! logging options.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::site::{DEFAULT_OUTPUT_DIR, DEFAULT_STYLESHEET, DEFAULT_TEMPLATE, SiteLayout};

/// Logbook - turn a git repository's history into a static website
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "logbook")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository to render
    ///
    /// Optional at the parser level so that a missing repository is reported
    /// with a plain message rather than clap's usage error.
    pub repo: Option<PathBuf>,

    /// Further positional arguments, accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Directory the site is written to
    ///
    /// Created if missing. Existing files are left in place.
    /// Defaults to ./output.
    #[arg(short, long, env = "LOGBOOK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Page template file
    ///
    /// Defaults to ./templates/base.html.
    #[arg(short, long, env = "LOGBOOK_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Stylesheet copied into the output directory
    ///
    /// Defaults to ./templates/styles.css.
    #[arg(short, long, env = "LOGBOOK_STYLESHEET")]
    pub stylesheet: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so that stdout only carries progress lines.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the output directory, using a default if not specified
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Get the template path, using a default if not specified
    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.template
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE))
    }

    /// Get the stylesheet path, using a default if not specified
    #[must_use]
    pub fn stylesheet_path(&self) -> PathBuf {
        self.stylesheet
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STYLESHEET))
    }

    /// Site layout built from the configured paths
    #[must_use]
    pub fn site_layout(&self) -> SiteLayout {
        SiteLayout {
            template: self.template_path(),
            stylesheet: self.stylesheet_path(),
            output_dir: self.output_dir(),
        }
    }

    /// Validate the configuration, returning the repository path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No repository path was given
    /// - The repository path doesn't exist
    pub fn validate(&self) -> Result<&Path, ConfigError> {
        let repo = self.repo.as_deref().ok_or(ConfigError::MissingRepository)?;
        if !repo.exists() {
            return Err(ConfigError::RepositoryNotFound(repo.to_path_buf()));
        }
        Ok(repo)
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No repository argument
    #[error("Please provide a repo")]
    MissingRepository,

    /// Repository path not found
    #[error("{} doesn't exist", .0.display())]
    RepositoryNotFound(PathBuf),
}
