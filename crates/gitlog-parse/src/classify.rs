// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification
//!
//! [`classify`] maps a single line of `git log` output to a [`LineRole`].
//! Roles are tried in a fixed order and the first match wins:
//!
//! 1. compact `oneline` record (`<40 hex> <subject>`)
//! 2. record boundary (`commit `)
//! 3. merge parents (`Merge: `)
//! 4. author headers (`Author: `, `AuthorDate: `)
//! 5. committer headers (`Commit: `, `CommitDate: `) and plain `Date: `
//! 6. message line (four-space indent)
//! 7. per-file diffstat line
//! 8. diffstat summary line
//! 9. anything else is unclassified
//!
//! Several roles share a leading-space prefix, so the order is significant.

use crate::extract;

/// Indentation git puts in front of every message line
const MESSAGE_INDENT: &str = "    ";

/// Marker that separates a diffstat summary from a per-file line
const SUMMARY_MARKER: &str = "changed, ";

/// Length of a full SHA-1 commit hash
const FULL_HASH_LEN: usize = 40;

/// The role a line plays in a log record
///
/// Variants borrow the part of the line that carries the value; header
/// values have the prefix and surrounding whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole<'a> {
    /// A complete `oneline` record
    CompactCommit {
        /// Full commit hash
        hash: &'a str,
        /// Rest of the line
        message: &'a str,
    },
    /// `commit <hash>` line starting a multi-line record
    RecordBoundary {
        /// Everything after `commit `
        commit: &'a str,
    },
    /// `Merge: <parents>`
    MergeParents(&'a str),
    /// `Author: <name> <email>`
    Author(&'a str),
    /// `AuthorDate: <date>`
    AuthorDate(&'a str),
    /// `Commit: <name> <email>`
    Committer(&'a str),
    /// `CommitDate: <date>`
    CommitDate(&'a str),
    /// `Date: <date>`, the single-identity form of the author date
    Date(&'a str),
    /// Message content with the indentation removed
    Message(&'a str),
    /// Per-file diffstat line
    FileStat {
        /// Path before the `|` column
        path: &'a str,
    },
    /// Diffstat summary line, kept whole for the stats grammar
    SummaryStats(&'a str),
    /// Anything else
    Unclassified,
}

/// Classify one line of `git log` output
///
/// Pure and total: every line gets exactly one role.
#[must_use]
pub fn classify(line: &str) -> LineRole<'_> {
    if let Some(role) = compact_commit(line) {
        return role;
    }

    if let Some(role) = header(line) {
        return role;
    }

    if let Some(content) = line.strip_prefix(MESSAGE_INDENT) {
        return LineRole::Message(content);
    }

    if line.starts_with(' ') {
        if !line.contains(SUMMARY_MARKER) {
            return LineRole::FileStat {
                path: extract::file_path(line),
            };
        }
        if extract::is_stats_summary(line) {
            return LineRole::SummaryStats(line);
        }
    }

    LineRole::Unclassified
}

/// Check whether a token is a full 40-character hex commit hash
#[must_use]
pub fn is_full_hash(token: &str) -> bool {
    token.len() == FULL_HASH_LEN && token.chars().all(|c| c.is_ascii_hexdigit())
}

fn compact_commit(line: &str) -> Option<LineRole<'_>> {
    let (hash, message) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(hash, rest)| (hash, rest.trim_start()));

    is_full_hash(hash).then_some(LineRole::CompactCommit { hash, message })
}

fn header(line: &str) -> Option<LineRole<'_>> {
    let headers: [(&str, fn(&str) -> LineRole<'_>); 7] = [
        ("commit ", record_boundary),
        ("Merge: ", |v| LineRole::MergeParents(v)),
        ("Author: ", |v| LineRole::Author(v)),
        ("AuthorDate: ", |v| LineRole::AuthorDate(v)),
        ("Commit: ", |v| LineRole::Committer(v)),
        ("CommitDate: ", |v| LineRole::CommitDate(v)),
        ("Date: ", |v| LineRole::Date(v)),
    ];

    headers.iter().find_map(|(prefix, role)| {
        let value = line.strip_prefix(*prefix)?.trim();
        Some(if value.is_empty() {
            LineRole::Unclassified
        } else {
            role(value)
        })
    })
}

fn record_boundary(commit: &str) -> LineRole<'_> {
    LineRole::RecordBoundary { commit }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: classification is pure
        #[test]
        fn prop_classification_is_idempotent(line in "\\PC{0,80}") {
            prop_assert_eq!(classify(&line), classify(&line));
        }

        /// Property: any 40-hex token at column 0 is a compact record
        #[test]
        fn prop_full_hash_line_is_compact(hash in "[0-9a-f]{40}", msg in "[a-z ]{0,30}") {
            let line = format!("{hash} {msg}");
            let is_compact = matches!(
                classify(&line),
                LineRole::CompactCommit { hash: h, .. } if h == hash
            );
            prop_assert!(is_compact);
        }

        /// Property: four-space indented text is always a message line
        #[test]
        fn prop_indented_text_is_message(body in "[a-zA-Z0-9 ,.:|]{0,60}") {
            let line = format!("    {body}");
            prop_assert_eq!(classify(&line), LineRole::Message(&body));
        }
    }
}
