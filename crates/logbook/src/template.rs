// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The page template and the values it receives
//!
//! Every page is rendered from one template with these values:
//!
//! | name      | value                                         |
//! |-----------|-----------------------------------------------|
//! | `title`   | first line of the commit message              |
//! | `hash`    | commit SHA                                    |
//! | `author`  | author name                                   |
//! | `date`    | commit time, `YYYY-MM-DD HH:MM:SS UTC`        |
//! | `body`    | rest of the message as HTML                   |
//! | `toc`     | list of `{title, path}`, identical on every page |
//! | `changes` | list of `{path, diff}`, `diff` being HTML     |
//!
//! HTML values are marked safe; everything else is escaped.

use std::path::Path;

use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;

use crate::site::SiteError;

/// Name the template is registered under
pub const TEMPLATE_NAME: &str = "base.html";

/// One table of contents link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Commit title
    pub title: String,
    /// Page filename
    pub path: String,
}

/// A changed file as shown on a page
#[derive(Debug, Serialize)]
pub struct RenderedChange<'a> {
    /// Path to the file
    pub path: &'a str,
    /// Highlighted diff HTML
    pub diff: Value,
}

/// Values for one page
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    /// Commit title
    pub title: &'a str,
    /// Commit SHA
    pub hash: &'a str,
    /// Author name
    pub author: &'a str,
    /// Formatted commit time
    pub date: String,
    /// Commit body HTML
    pub body: Value,
    /// Shared table of contents
    pub toc: &'a [TocEntry],
    /// Changed files
    pub changes: Vec<RenderedChange<'a>>,
}

/// Mark rendered HTML as safe so the template does not escape it again
#[must_use]
pub fn safe_html(html: String) -> Value {
    Value::from_safe_string(html)
}

/// The shared page template
pub struct PageTemplate {
    env: Environment<'static>,
}

impl PageTemplate {
    /// Load the template from a file
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Io` if the file cannot be read and
    /// `SiteError::Template` if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(source)?)
    }

    /// Build the template from source text
    ///
    /// # Errors
    ///
    /// Returns a `minijinja::Error` if the source does not parse.
    pub fn from_source(source: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template_owned(TEMPLATE_NAME, source.into())?;
        Ok(Self { env })
    }

    /// Render one page
    ///
    /// # Errors
    ///
    /// Returns a `minijinja::Error` if rendering fails.
    pub fn render(&self, page: &PageContext<'_>) -> Result<String, minijinja::Error> {
        self.env.get_template(TEMPLATE_NAME)?.render(page)
    }
}
