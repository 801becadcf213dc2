// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Field extraction from classified lines
//!
//! Every function here is pure and works on the slices handed out by
//! [`classify`](crate::classify::classify).

use regex::Regex;
use std::sync::LazyLock;

use crate::record::Stats;

/// Regex for a diffstat summary line
/// Example: ` 3 files changed, 10 insertions(+), 2 deletions(-)`
///
/// Groups:
/// - files (required)
/// - insertions (only with an insertion clause)
/// - deletions (only with a deletion clause)
static STATS_SUMMARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<files>\d+)\s+files?\s+changed(?:,\s+(?P<insertions>\d+)\s+insertions?\(\+\))?(?:,\s+(?P<deletions>\d+)\s+deletions?\(-\))?",
    )
    .expect("Invalid stats summary regex")
});

/// A name/email pair taken from an `Author:` or `Commit:` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    /// Everything before the last whitespace boundary
    pub name: &'a str,
    /// Last token with surrounding angle brackets removed
    pub email: Option<&'a str>,
}

/// Split an identity header value into name and email
///
/// The split happens on the last whitespace boundary, so a name without an
/// email loses its last word to the email slot. git always prints the email,
/// so this only bites hand-edited input.
#[must_use]
pub fn split_identity(value: &str) -> Identity<'_> {
    let value = value.trim();
    match value.rsplit_once(char::is_whitespace) {
        Some((name, email)) => Identity {
            name: name.trim_end(),
            email: Some(strip_angle_brackets(email)),
        },
        None if value.starts_with('<') => Identity {
            name: "",
            email: Some(strip_angle_brackets(value)),
        },
        None => Identity {
            name: value,
            email: None,
        },
    }
}

fn strip_angle_brackets(token: &str) -> &str {
    token.trim_start_matches('<').trim_end_matches('>')
}

/// Check whether a line matches the diffstat summary grammar
#[must_use]
pub fn is_stats_summary(line: &str) -> bool {
    STATS_SUMMARY_REGEX.is_match(line)
}

/// Parse a diffstat summary line
///
/// Missing insertion or deletion clauses become `"0"`. The returned stats
/// have an empty file list; paths are attached when the record is sealed.
#[must_use]
pub fn parse_stats(line: &str) -> Option<Stats> {
    let caps = STATS_SUMMARY_REGEX.captures(line)?;
    let count = |name: &str| {
        caps.name(name)
            .map_or_else(|| "0".to_string(), |m| m.as_str().to_string())
    };

    Some(Stats {
        files_changed: caps.name("files")?.as_str().to_string(),
        insertions: count("insertions"),
        deletions: count("deletions"),
        files: Vec::new(),
    })
}

/// Path portion of a per-file diffstat line (text before the first `|`)
#[must_use]
pub fn file_path(line: &str) -> &str {
    line.split_once('|').map_or(line, |(path, _)| path).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_split_identity_name_and_email() {
        let id = split_identity("Kelly Brazil <kellyjonbrazil@gmail.com>");
        assert_eq!(id.name, "Kelly Brazil");
        assert_eq!(id.email, Some("kellyjonbrazil@gmail.com"));
    }

    #[test]
    fn test_split_identity_extra_whitespace() {
        let id = split_identity("  Jane   Doe    <jane@example.com>  ");
        assert_eq!(id.name, "Jane   Doe");
        assert_eq!(id.email, Some("jane@example.com"));
    }

    #[test]
    fn test_split_identity_without_email_peels_last_word() {
        let id = split_identity("Jane Doe");
        assert_eq!(id.name, "Jane");
        assert_eq!(id.email, Some("Doe"));
    }

    #[test]
    fn test_split_identity_single_token() {
        assert_eq!(
            split_identity("jane"),
            Identity {
                name: "jane",
                email: None
            }
        );
        assert_eq!(
            split_identity("<jane@example.com>"),
            Identity {
                name: "",
                email: Some("jane@example.com")
            }
        );
    }

    #[test]
    fn test_split_identity_empty_email() {
        let id = split_identity("Jane Doe <>");
        assert_eq!(id.name, "Jane Doe");
        assert_eq!(id.email, Some(""));
    }

    #[test]
    fn test_parse_stats_full() {
        let stats = parse_stats(" 3 files changed, 10 insertions(+), 2 deletions(-)")
            .expect("should parse");
        assert_eq!(stats.files_changed, "3");
        assert_eq!(stats.insertions, "10");
        assert_eq!(stats.deletions, "2");
        assert!(stats.files.is_empty());
    }

    #[test]
    fn test_parse_stats_insertions_only() {
        let stats = parse_stats(" 3 files changed, 10 insertions(+)").expect("should parse");
        assert_eq!(stats.insertions, "10");
        assert_eq!(stats.deletions, "0");
    }

    #[test]
    fn test_parse_stats_deletions_only() {
        let stats = parse_stats(" 1 file changed, 1 deletion(-)").expect("should parse");
        assert_eq!(stats.files_changed, "1");
        assert_eq!(stats.insertions, "0");
        assert_eq!(stats.deletions, "1");
    }

    #[test]
    fn test_parse_stats_singular_insertion() {
        let stats = parse_stats(" 1 file changed, 1 insertion(+), 1 deletion(-)")
            .expect("should parse");
        assert_eq!(stats.insertions, "1");
        assert_eq!(stats.deletions, "1");
    }

    #[test]
    fn test_parse_stats_requires_file_count() {
        assert!(parse_stats(" files changed, 10 insertions(+)").is_none());
        assert!(!is_stats_summary(" nothing changed, really"));
    }

    #[test]
    fn test_file_path() {
        assert_eq!(file_path(" src/lib.rs     | 12 ++++++------"), "src/lib.rs");
        assert_eq!(file_path(" docs/{a.md => b.md} | 0"), "docs/{a.md => b.md}");
        assert_eq!(file_path(" Bin 0 -> 1024 bytes"), "Bin 0 -> 1024 bytes");
    }
}
