//! Commit record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A changed text file within a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Path to the file
    pub path: String,
    /// Unified diff between the previous and current content
    pub diff: String,
}

/// Everything the site needs to know about one commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// First line of the commit message
    pub title: String,
    /// The commit SHA
    pub hash: String,
    /// Message lines after the title and the separator line
    pub body: String,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Changed text files, in tree diff order
    pub changes: Vec<FileChange>,
}

impl CommitRecord {
    /// Get the short hash (first 7 characters)
    #[must_use]
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}

/// Split a commit message into title and body.
///
/// The title is the first line. The second line, conventionally blank, is
/// dropped whatever it contains; everything after it is the body.
#[must_use]
pub fn split_message(message: &str) -> (String, String) {
    let mut lines = message.lines();
    let title = lines.next().unwrap_or("").to_string();
    let body = lines.skip(1).collect::<Vec<_>>().join("\n");
    (title, body)
}
