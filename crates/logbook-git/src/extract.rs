// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History extraction
//!
//! Walks commits oldest-to-newest, diffing each commit against the one before
//! it (the empty tree for the first commit), and collects a [`CommitRecord`]
//! per commit. Files whose content type is not text are left out.

use std::io::Write;

use tracing::{debug, info};

use crate::commit::{CommitRecord, FileChange, split_message};
use crate::diff::{is_text_mime, unified_diff};
use crate::error::HistoryError;
use crate::reader::{ChangedPath, CommitInfo, EMPTY_TREE_SHA, RepositoryReader};

/// Extract every commit reachable from HEAD, oldest first
///
/// A `Processing "<title>"...` line is written to `progress` for each commit.
///
/// # Errors
///
/// Returns `HistoryError` if the repository cannot be read, a text file is not
/// valid UTF-8, or a progress line cannot be written.
pub fn extract_history<R, W>(reader: &R, progress: &mut W) -> Result<Vec<CommitRecord>, HistoryError>
where
    R: RepositoryReader + ?Sized,
    W: Write + ?Sized,
{
    let commits = reader.commits_oldest_first()?;
    info!(commits = commits.len(), "Extracting commit history");

    let initial = (Vec::with_capacity(commits.len()), EMPTY_TREE_SHA.to_string());
    let (records, _) = commits
        .into_iter()
        .try_fold(initial, |(mut records, previous), commit| {
            let record = extract_commit(reader, &previous, commit, progress)?;
            let current = record.hash.clone();
            records.push(record);
            Ok::<_, HistoryError>((records, current))
        })?;

    info!(commits = records.len(), "Commit history extracted");
    Ok(records)
}

/// Build the record for one commit, diffed against `previous`
fn extract_commit<R, W>(
    reader: &R,
    previous: &str,
    commit: CommitInfo,
    progress: &mut W,
) -> Result<CommitRecord, HistoryError>
where
    R: RepositoryReader + ?Sized,
    W: Write + ?Sized,
{
    let (title, body) = split_message(&commit.message);
    writeln!(progress, "Processing \"{title}\"...")?;

    let mut changes = Vec::new();
    for changed in reader.tree_diff(previous, &commit.sha)? {
        if let Some(change) = file_change(reader, previous, &commit.sha, &changed)? {
            changes.push(change);
        }
    }

    let record = CommitRecord {
        title,
        hash: commit.sha,
        body,
        author: commit.author,
        timestamp: commit.timestamp,
        changes,
    };
    debug!(sha = %record.short_hash(), changes = record.changes.len(), "Extracted commit");

    Ok(record)
}

/// Diff one path between two revisions, `None` if it is not text
///
/// A renamed file is read at its old path before and its new path after,
/// and labelled with the new path.
fn file_change<R>(
    reader: &R,
    previous: &str,
    current: &str,
    changed: &ChangedPath,
) -> Result<Option<FileChange>, HistoryError>
where
    R: RepositoryReader + ?Sized,
{
    let path = changed.new_path.as_str();
    let before = reader.read_blob(previous, &changed.old_path)?;
    let after = reader.read_blob(current, path)?;

    if before.is_none() && after.is_none() {
        debug!(path, "No blob on either side, skipping");
        return Ok(None);
    }

    let sides = [(&changed.old_path, &before), (&changed.new_path, &after)];
    for (side_path, content) in sides {
        let Some(content) = content else { continue };
        let mime = reader.mime_type_of(side_path, content);
        if !is_text_mime(&mime) {
            debug!(path = %side_path, mime = %mime, "Skipping non-text file");
            return Ok(None);
        }
    }

    let before = decode(&changed.old_path, before)?;
    let after = decode(path, after)?;
    let diff = unified_diff(path, before.as_deref(), after.as_deref());

    Ok(Some(FileChange {
        path: path.to_string(),
        diff,
    }))
}

fn decode(path: &str, content: Option<Vec<u8>>) -> Result<Option<String>, HistoryError> {
    content
        .map(String::from_utf8)
        .transpose()
        .map_err(|source| HistoryError::Decode {
            path: path.to_string(),
            source,
        })
}
