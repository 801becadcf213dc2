// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Structured log records produced by the parser

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Date layouts git emits for `--date=default` and `--date=iso`
const GIT_DATE_FORMATS: &[&str] = &["%a %b %d %H:%M:%S %Y %z", "%Y-%m-%d %H:%M:%S %z"];

/// One commit recovered from `git log` output
///
/// Optional fields are omitted from JSON when absent. `message` is always
/// serialized, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Commit hash as printed on the boundary line
    pub commit: String,
    /// Space-separated abbreviated parent hashes of a merge commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_parents: Option<String>,
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Author email, without angle brackets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    /// Author date in its raw textual form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Committer name (`full` and `fuller` layouts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_by: Option<String>,
    /// Committer email, without angle brackets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_by_email: Option<String>,
    /// Commit date in its raw textual form (`fuller` layout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_by_date: Option<String>,
    /// Commit message, lines joined with `\n`
    #[serde(default)]
    pub message: String,
    /// Diffstat summary, present only when a summary line followed the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

/// Diffstat attached to a record
///
/// Counts stay textual, exactly as the summary line printed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of files changed
    pub files_changed: String,
    /// Lines inserted, `"0"` when the summary had no insertion clause
    pub insertions: String,
    /// Lines deleted, `"0"` when the summary had no deletion clause
    pub deletions: String,
    /// Paths listed above the summary line, in order
    #[serde(default)]
    pub files: Vec<String>,
}

impl LogRecord {
    /// Create a record holding only a commit hash
    #[must_use]
    pub fn new(commit: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            ..Default::default()
        }
    }

    /// Get the short hash (first 7 characters)
    #[must_use]
    pub fn short_commit(&self) -> &str {
        match self.commit.char_indices().nth(7) {
            Some((idx, _)) => &self.commit[..idx],
            None => &self.commit,
        }
    }

    /// Get the first line of the message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Check if a `Merge:` line was seen for this record
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.merge_parents.is_some()
    }

    /// Author date parsed into a timestamp, if present and recognizable
    #[must_use]
    pub fn author_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.date.as_deref().and_then(parse_git_date)
    }

    /// Commit date parsed into a timestamp, if present and recognizable
    #[must_use]
    pub fn committer_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.commit_by_date.as_deref().and_then(parse_git_date)
    }
}

impl Stats {
    /// Numeric value of `files_changed`
    #[must_use]
    pub fn files_changed_count(&self) -> Option<u64> {
        self.files_changed.parse().ok()
    }

    /// Numeric value of `insertions`
    #[must_use]
    pub fn insertions_count(&self) -> Option<u64> {
        self.insertions.parse().ok()
    }

    /// Numeric value of `deletions`
    #[must_use]
    pub fn deletions_count(&self) -> Option<u64> {
        self.deletions.parse().ok()
    }
}

/// Parse a date as printed by `git log`
///
/// Accepts git's default layout (`Thu Jan 15 10:02:31 2026 +0100`), the
/// `--date=iso` layout, RFC 2822 and RFC 3339.
#[must_use]
pub fn parse_git_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    GIT_DATE_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok())
}
