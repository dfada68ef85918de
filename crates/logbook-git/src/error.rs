// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for logbook-git

use thiserror::Error;

/// Errors that can occur while extracting commit history
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was opened as a repository
        path: String,
    },

    /// Revision that does not resolve to a tree
    #[error("Invalid revision: {revision}")]
    InvalidRevision {
        /// The revision string that could not be resolved
        revision: String,
    },

    /// A blob typed as text is not valid UTF-8
    #[error("Failed to decode {path} as UTF-8: {source}")]
    Decode {
        /// Path of the offending file
        path: String,
        /// Underlying decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Writing a progress line failed
    #[error("Failed to report progress: {0}")]
    Progress(#[from] std::io::Error),
}
