// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository access for history extraction
//!
//! [`RepositoryReader`] is the narrow view of a repository that extraction
//! needs. [`GitRepo`] implements it on top of the `git2` crate.

use crate::diff::guess_mime_type;
use crate::error::HistoryError;
use chrono::{DateTime, TimeZone, Utc};
use git2::{DiffFindOptions, ErrorCode, ObjectType, Repository, Sort, Tree};
use std::path::Path;
use tracing::debug;

/// SHA of the empty tree, the baseline the first commit is diffed against.
///
/// Equivalent to `printf '' | git hash-object -t tree --stdin`.
pub const EMPTY_TREE_SHA: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Commit metadata as read from the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// The commit SHA
    pub sha: String,
    /// Full commit message
    pub message: String,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

/// A path that differs between two trees
///
/// For renames `old_path` and `new_path` differ; otherwise they are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedPath {
    /// Path in the older tree
    pub old_path: String,
    /// Path in the newer tree, used to label the change
    pub new_path: String,
}

impl ChangedPath {
    /// A change that keeps its path
    #[must_use]
    pub fn unmoved(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            old_path: path.clone(),
            new_path: path,
        }
    }
}

/// Read-only access to a repository's history
///
/// Revisions are commit SHAs, or [`EMPTY_TREE_SHA`] for the empty baseline.
pub trait RepositoryReader {
    /// List every commit reachable from HEAD, oldest first
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the history cannot be walked.
    fn commits_oldest_first(&self) -> Result<Vec<CommitInfo>, HistoryError>;

    /// List the paths that differ between two revisions' trees
    ///
    /// Renamed files are reported once, as a single [`ChangedPath`].
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if either revision cannot be resolved.
    fn tree_diff(&self, from: &str, to: &str) -> Result<Vec<ChangedPath>, HistoryError>;

    /// Read a file's content at a revision, `None` if it is not there
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the revision or the blob cannot be read.
    fn read_blob(&self, revision: &str, path: &str) -> Result<Option<Vec<u8>>, HistoryError>;

    /// Content type of a file
    fn mime_type_of(&self, path: &str, _content: &[u8]) -> String {
        guess_mime_type(path)
    }
}

/// A git repository wrapper for reading history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| HistoryError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        debug!(path = %repo.path().display(), "Opened repository");
        Ok(Self { repo })
    }

    /// Resolve a revision to its tree, `None` for the empty tree
    fn tree_at(&self, revision: &str) -> Result<Option<Tree<'_>>, HistoryError> {
        if revision == EMPTY_TREE_SHA {
            return Ok(None);
        }

        let tree = self
            .repo
            .revparse_single(revision)
            .and_then(|obj| obj.peel_to_tree())
            .map_err(|_| HistoryError::InvalidRevision {
                revision: revision.to_string(),
            })?;
        Ok(Some(tree))
    }

    /// Convert a git2 commit into commit metadata
    fn commit_info(git_commit: &git2::Commit<'_>) -> CommitInfo {
        let timestamp = Utc
            .timestamp_opt(git_commit.time().seconds(), 0)
            .single()
            .unwrap_or_default();

        CommitInfo {
            sha: git_commit.id().to_string(),
            message: git_commit.message().unwrap_or("").to_string(),
            author: git_commit.author().name().unwrap_or("Unknown").to_string(),
            timestamp,
        }
    }
}

impl RepositoryReader for GitRepo {
    fn commits_oldest_first(&self) -> Result<Vec<CommitInfo>, HistoryError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;
        revwalk.push_head()?;

        // Walk newest first, then flip the whole list.
        let mut commits = Vec::new();
        for oid_result in revwalk {
            let git_commit = self.repo.find_commit(oid_result?)?;
            commits.push(Self::commit_info(&git_commit));
        }
        commits.reverse();

        Ok(commits)
    }

    fn tree_diff(&self, from: &str, to: &str) -> Result<Vec<ChangedPath>, HistoryError> {
        let old_tree = self.tree_at(from)?;
        let new_tree = self.tree_at(to)?;

        let mut diff = self
            .repo
            .diff_tree_to_tree(old_tree.as_ref(), new_tree.as_ref(), None)?;
        diff.find_similar(Some(DiffFindOptions::new().renames(true)))?;

        let paths = diff
            .deltas()
            .filter_map(|delta| {
                let old = delta.old_file().path();
                let new = delta.new_file().path();
                let old_path = old.or(new)?.display().to_string();
                let new_path = new.or(old)?.display().to_string();
                Some(ChangedPath { old_path, new_path })
            })
            .collect();

        Ok(paths)
    }

    fn read_blob(&self, revision: &str, path: &str) -> Result<Option<Vec<u8>>, HistoryError> {
        let Some(tree) = self.tree_at(revision)? else {
            return Ok(None);
        };

        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Submodules show up as commit entries
        if entry.kind() != Some(ObjectType::Blob) {
            return Ok(None);
        }

        let blob = self.repo.find_blob(entry.id())?;
        Ok(Some(blob.content().to_vec()))
    }
}
