//! logbook: turn a git repository's commit history into a static website
//!
//! Extracts every commit oldest-to-newest, then renders one page per commit
//! plus an `index.html` into the output directory.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use logbook::config::{Config, ConfigError};
use logbook::site::SiteRenderer;
use logbook_git::{GitRepo, extract_history};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the per-commit progress lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let repo_path = match config.validate() {
        Ok(path) => path,
        Err(e @ ConfigError::MissingRepository) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e @ ConfigError::RepositoryNotFound(_)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config, repo_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Site generation failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, repo_path: &Path) -> anyhow::Result<()> {
    info!(path = %repo_path.display(), "Starting site generation");

    let repo = GitRepo::open(repo_path)?;
    let records = extract_history(&repo, &mut std::io::stdout().lock())
        .context("Failed to extract commit history")?;

    let renderer = SiteRenderer::new(config.site_layout()).context("Failed to load template")?;
    let written = renderer
        .render(&records)
        .context("Failed to render site")?;

    info!(
        commits = records.len(),
        files = written.len(),
        output = %renderer.layout().output_dir.display(),
        "Site generation complete"
    );
    Ok(())
}
