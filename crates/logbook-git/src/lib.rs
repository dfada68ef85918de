// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logbook-git: Commit history extraction for logbook
//!
//! This library crate walks a repository's history oldest-to-newest and
//! produces one [`CommitRecord`] per commit, holding the commit message and a
//! unified diff for every changed text file.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use logbook_git::{GitRepo, extract_history};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let records = extract_history(&repo, &mut std::io::stdout()).expect("extract history");
//!
//! for r in records {
//!     println!("{} - {} ({} files)", r.short_hash(), r.title, r.changes.len());
//! }
//! ```

pub mod commit;
pub mod diff;
pub mod error;
pub mod extract;
pub mod reader;

pub use commit::{CommitRecord, FileChange};
pub use error::HistoryError;
pub use extract::extract_history;
pub use reader::{ChangedPath, CommitInfo, EMPTY_TREE_SHA, GitRepo, RepositoryReader};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::{CommitRecord, FileChange};
    pub use crate::error::HistoryError;
    pub use crate::extract::extract_history;
    pub use crate::reader::{ChangedPath, GitRepo, RepositoryReader};
}
