// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test utilities for logbook integration tests
//!
//! This module provides utilities for:
//! - Temporary directory management
//! - Git repository scaffolding for tests
//! - Locating the shipped template and stylesheet

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU32, Ordering};

use logbook::site::SiteLayout;

// ============================================================================
// Temporary Directory Management
// ============================================================================

/// Counter for generating unique test directory names
static TEST_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A temporary directory that is automatically cleaned up when dropped
///
/// This provides a unique, isolated directory for each test to avoid
/// interference between concurrent tests.
pub struct TempTestDir {
    path: PathBuf,
    cleanup: bool,
}

impl TempTestDir {
    /// Create a new temporary test directory
    ///
    /// The directory is created under the system temp directory with a
    /// unique name based on the test name and a counter.
    pub fn new(test_name: &str) -> Self {
        let counter = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir_name = format!(
            "logbook-test-{}-{}-{}",
            test_name,
            std::process::id(),
            counter
        );
        let path = std::env::temp_dir().join(dir_name);

        if path.exists() {
            fs::remove_dir_all(&path).expect("Failed to clear stale temp test directory");
        }
        fs::create_dir_all(&path).expect("Failed to create temp test directory");

        Self {
            path,
            cleanup: true,
        }
    }

    /// Create a temp directory and don't clean it up (for debugging)
    pub fn new_persistent(test_name: &str) -> Self {
        let mut temp = Self::new(test_name);
        temp.cleanup = false;
        eprintln!("Persistent temp dir: {}", temp.path.display());
        temp
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a file within the temp directory with the given content
    pub fn create_file(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the temp directory
    pub fn read_file(&self, relative_path: &str) -> String {
        let file_path = self.path.join(relative_path);
        fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the temp directory
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.path.join(relative_path).exists()
    }

    /// Sorted names of the files directly inside a subdirectory
    pub fn list_files(&self, relative_dir: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path.join(relative_dir))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.cleanup && self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

// ============================================================================
// Git Repository Scaffolding
// ============================================================================

/// A temporary git repository for testing
///
/// This creates a real git repository with configurable commits,
/// driven through the `git` command line.
pub struct TestGitRepo {
    temp_dir: TempTestDir,
    initialized: bool,
}

impl TestGitRepo {
    /// Create a new test git repository
    pub fn new(test_name: &str) -> Self {
        let temp_dir = TempTestDir::new(test_name);
        Self {
            temp_dir,
            initialized: false,
        }
    }

    /// Initialize the git repository
    pub fn init(&mut self) -> &mut Self {
        if !self.initialized {
            run_git(&self.temp_dir.path, &["init"]);
            run_git(
                &self.temp_dir.path,
                &["config", "user.email", "test@example.com"],
            );
            run_git(&self.temp_dir.path, &["config", "user.name", "Test Author"]);
            run_git(&self.temp_dir.path, &["config", "commit.gpgsign", "false"]);
            self.initialized = true;
        }
        self
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file and stage it
    pub fn create_file(&self, relative_path: &str, content: &str) -> &Self {
        self.create_binary_file(relative_path, content.as_bytes())
    }

    /// Create a file with raw bytes and stage it
    pub fn create_binary_file(&self, relative_path: &str, content: &[u8]) -> &Self {
        self.temp_dir.create_file(relative_path, content);
        run_git(self.temp_dir.path(), &["add", relative_path]);
        self
    }

    /// Delete a tracked file and stage the removal
    pub fn remove_file(&self, relative_path: &str) -> &Self {
        run_git(self.temp_dir.path(), &["rm", "-q", relative_path]);
        self
    }

    /// Create a commit with the given message
    pub fn commit(&self, message: &str) -> String {
        run_git(
            self.temp_dir.path(),
            &["commit", "--allow-empty", "-q", "-m", message],
        );
        self.get_head_sha()
    }

    /// Create a file and commit it in one step
    pub fn create_and_commit(&self, relative_path: &str, content: &str, message: &str) -> String {
        self.create_file(relative_path, content);
        self.commit(message)
    }

    /// Get the SHA of HEAD
    pub fn get_head_sha(&self) -> String {
        let output = Command::new("git")
            .current_dir(self.temp_dir.path())
            .args(["rev-parse", "HEAD"])
            .output()
            .expect("Failed to get HEAD SHA");

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Create multiple commits for testing
    pub fn create_commits(&self, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| {
                self.create_and_commit(
                    &format!("file_{}.txt", i),
                    &format!("Content {}\n", i),
                    &format!("Commit {}", i),
                )
            })
            .collect()
    }
}

/// Run a git command in the given directory
fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run git command");

    if !output.status.success() {
        panic!(
            "Git command failed: git {}\nstderr: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

// ============================================================================
// Site Assets
// ============================================================================

/// The workspace's `templates/` directory
pub fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
}

/// A layout using the shipped assets and writing into `output_dir`
pub fn shipped_layout(output_dir: &Path) -> SiteLayout {
    SiteLayout {
        template: templates_dir().join("base.html"),
        stylesheet: templates_dir().join("styles.css"),
        output_dir: output_dir.to_path_buf(),
    }
}

// ============================================================================
// Unit Tests for Utilities
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utils_temp_dir_creation() {
        let temp = TempTestDir::new("test_creation");
        assert!(temp.path().exists());
        assert!(temp.path().is_dir());
    }

    #[test]
    fn test_utils_temp_dir_cleanup() {
        let path;
        {
            let temp = TempTestDir::new("test_cleanup");
            path = temp.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_utils_shipped_assets_exist() {
        assert!(templates_dir().join("base.html").is_file());
        assert!(templates_dir().join("styles.css").is_file());
    }

    #[test]
    fn test_utils_git_repo_commits() {
        let mut repo = TestGitRepo::new("test_git_repo");
        repo.init();
        let shas = repo.create_commits(2);
        assert_eq!(shas.len(), 2);
        assert_eq!(repo.get_head_sha(), shas[1]);
    }
}
