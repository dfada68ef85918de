// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Unified diffs and content type checks for changed files

use similar::TextDiff;

/// Lines of context around each hunk
pub const CONTEXT_LINES: usize = 3;

/// Content type assumed when the path gives no hint
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Guess a content type from a file path
#[must_use]
pub fn guess_mime_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string()
}

/// Whether a content type names text that can be diffed
#[must_use]
pub fn is_text_mime(mime: &str) -> bool {
    mime.starts_with("text")
}

/// Build a unified diff from `before` to `after`, labelled with `path` on
/// both sides.
///
/// A missing side diffs as no lines at all, whereas an empty file is a single
/// empty line. Lines are split on `\n` only, so a trailing newline shows up
/// as a final empty line. Returns an empty string when nothing changed.
#[must_use]
pub fn unified_diff(path: &str, before: Option<&str>, after: Option<&str>) -> String {
    let old = split_lines(before);
    let new = split_lines(after);

    let diff = TextDiff::from_slices(&old, &new);
    let text = diff
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(false)
        .header(path, path)
        .to_string();

    match text.strip_suffix('\n') {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}

fn split_lines(text: Option<&str>) -> Vec<&str> {
    text.map(|t| t.split('\n').collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_new_file_lines_are_added() {
        let diff = unified_diff("foo.txt", None, Some("a\nb\n"));
        let lines: Vec<&str> = diff.lines().collect();

        assert_eq!(lines[0], "--- foo.txt");
        assert_eq!(lines[1], "+++ foo.txt");
        assert!(lines[2].starts_with("@@"));
        assert_eq!(lines[3..].to_vec(), vec!["+a", "+b", "+"]);
    }

    #[test]
    fn test_deleted_file_lines_are_removed() {
        let diff = unified_diff("foo.txt", Some("a\nb"), None);
        let body: Vec<&str> = diff.lines().skip(3).collect();
        assert_eq!(body, vec!["-a", "-b"]);
    }

    #[test]
    fn test_modified_file_keeps_context() {
        let before = "one\ntwo\nthree\nfour\n";
        let after = "one\ntwo\n3\nfour\n";
        let diff = unified_diff("numbers.txt", Some(before), Some(after));

        assert!(diff.contains("\n-three\n"));
        assert!(diff.contains("\n+3\n"));
        assert!(diff.contains("\n one\n"));
        assert!(diff.contains("\n four\n"));
    }

    #[test]
    fn test_unchanged_content_is_empty() {
        let diff = unified_diff("same.txt", Some("x\ny\n"), Some("x\ny\n"));
        assert_eq!(diff, "");
    }

    #[test]
    fn test_no_trailing_newline() {
        let diff = unified_diff("foo.txt", None, Some("a"));
        assert!(!diff.ends_with('\n'));
        assert!(diff.ends_with("+a"));
    }

    #[test]
    fn test_empty_file_differs_from_missing_file() {
        let diff = unified_diff("empty.txt", None, Some(""));
        assert_eq!(diff.lines().last(), Some("+"));
    }

    #[test]
    fn test_guess_mime_type_text() {
        assert_eq!(guess_mime_type("notes.txt"), "text/plain");
        assert!(is_text_mime(&guess_mime_type("index.html")));
    }

    #[test]
    fn test_guess_mime_type_binary() {
        assert_eq!(guess_mime_type("logo.png"), "image/png");
        assert!(!is_text_mime(&guess_mime_type("logo.png")));
    }

    #[test]
    fn test_guess_mime_type_unknown_defaults_to_text() {
        assert_eq!(guess_mime_type("Makefile"), DEFAULT_MIME_TYPE);
        assert_eq!(guess_mime_type("data.unknownext"), DEFAULT_MIME_TYPE);
    }
}
