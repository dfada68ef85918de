// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Site rendering
//!
//! Turns extracted commit records into a directory of HTML pages, one per
//! commit, plus `index.html` (a copy of the first page) and the stylesheet.
//!
//! # Example
//!
//! ```no_run
//! use logbook::site::{SiteLayout, SiteRenderer};
//! use logbook_git::{GitRepo, extract_history};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let records = extract_history(&repo, &mut std::io::stdout()).expect("extract");
//!
//! let renderer = SiteRenderer::new(SiteLayout::default()).expect("load template");
//! let written = renderer.render(&records).expect("render site");
//! println!("Wrote {} pages", written.len());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use logbook_git::CommitRecord;
use thiserror::Error;
use tracing::{debug, info};

use crate::markdown::{MarkdownRenderer, fenced};
use crate::template::{PageContext, PageTemplate, RenderedChange, TocEntry, safe_html};

/// Default page template location
pub const DEFAULT_TEMPLATE: &str = "templates/base.html";

/// Default stylesheet location
pub const DEFAULT_STYLESHEET: &str = "templates/styles.css";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Filename of the copied stylesheet
pub const STYLESHEET_NAME: &str = "styles.css";

/// Filename of the landing page
pub const INDEX_NAME: &str = "index.html";

// ============================================================================
// Error Types
// ============================================================================

/// Site rendering errors
#[derive(Debug, Error)]
pub enum SiteError {
    /// Reading an input or writing an output failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Template parsing or rendering failed
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Syntax highlighting failed
    #[error("Highlighting error: {0}")]
    Highlight(#[from] syntect::Error),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Where the site's inputs come from and where pages go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Page template
    pub template: PathBuf,
    /// Stylesheet copied next to the pages
    pub stylesheet: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Page filename for a commit title
#[must_use]
pub fn page_filename(title: &str) -> String {
    format!("{}.html", slug::slugify(title))
}

/// Table of contents for the whole history, in record order
#[must_use]
pub fn build_toc(records: &[CommitRecord]) -> Vec<TocEntry> {
    records
        .iter()
        .map(|record| TocEntry {
            title: record.title.clone(),
            path: page_filename(&record.title),
        })
        .collect()
}

// ============================================================================
// Renderer
// ============================================================================

/// Renders commit records into HTML pages
pub struct SiteRenderer {
    layout: SiteLayout,
    template: PageTemplate,
    markdown: MarkdownRenderer,
}

impl SiteRenderer {
    /// Create a renderer, loading the page template
    ///
    /// # Errors
    ///
    /// Returns `SiteError` if the template cannot be read or parsed.
    pub fn new(layout: SiteLayout) -> Result<Self, SiteError> {
        let template = PageTemplate::from_file(&layout.template)?;
        debug!(template = %layout.template.display(), "Loaded page template");
        Ok(Self {
            layout,
            template,
            markdown: MarkdownRenderer::new(),
        })
    }

    /// The layout this renderer writes with
    #[must_use]
    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Render every record, returning the paths written in order
    ///
    /// The output directory is created if needed and never cleared. Pages
    /// whose titles share a slug overwrite each other, last one wins. The
    /// first record is also written as `index.html`.
    ///
    /// # Errors
    ///
    /// Returns `SiteError` on the first failure; pages written before it stay.
    pub fn render(&self, records: &[CommitRecord]) -> Result<Vec<PathBuf>, SiteError> {
        let output_dir = &self.layout.output_dir;
        info!(path = %output_dir.display(), records = records.len(), "Rendering site");

        fs::create_dir_all(output_dir).map_err(io_error(output_dir))?;

        let stylesheet = output_dir.join(STYLESHEET_NAME);
        fs::copy(&self.layout.stylesheet, &stylesheet).map_err(io_error(&self.layout.stylesheet))?;

        let toc = build_toc(records);
        let mut written = Vec::with_capacity(records.len() + 1);

        for (idx, record) in records.iter().enumerate() {
            let html = self.render_page(record, &toc)?;

            let page = output_dir.join(page_filename(&record.title));
            fs::write(&page, &html).map_err(io_error(&page))?;
            debug!(sha = %record.short_hash(), path = %page.display(), "Wrote page");
            written.push(page);

            if idx == 0 {
                let index = output_dir.join(INDEX_NAME);
                fs::write(&index, &html).map_err(io_error(&index))?;
                written.push(index);
            }
        }

        info!(pages = written.len(), "Site rendered");
        Ok(written)
    }

    /// Render one record to a full HTML page
    ///
    /// # Errors
    ///
    /// Returns `SiteError` if markdown highlighting or the template fails.
    pub fn render_page(&self, record: &CommitRecord, toc: &[TocEntry]) -> Result<String, SiteError> {
        let changes = record
            .changes
            .iter()
            .map(|change| -> Result<RenderedChange<'_>, SiteError> {
                let html = self.markdown.render(&fenced("diff", &change.diff))?;
                Ok(RenderedChange {
                    path: &change.path,
                    diff: safe_html(html),
                })
            })
            .collect::<Result<Vec<_>, SiteError>>()?;

        let page = PageContext {
            title: &record.title,
            hash: &record.hash,
            author: &record.author,
            date: record.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            body: safe_html(self.markdown.render(&record.body)?),
            toc,
            changes,
        };

        Ok(self.template.render(&page)?)
    }
}
