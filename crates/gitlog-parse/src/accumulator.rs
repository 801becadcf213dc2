// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Record accumulation
//!
//! The [`Accumulator`] folds classified lines into [`LogRecord`]s. It is a
//! two-state machine: either no record is pending (`Idle`) or one record is
//! being built together with its buffered message lines and file paths
//! (`Open`). A record is sealed when the next boundary arrives or when the
//! accumulator is finished.

use std::mem;

use tracing::{debug, trace};

use crate::classify::{LineRole, classify};
use crate::extract;
use crate::record::LogRecord;

enum State {
    Idle,
    Open(OpenRecord),
}

/// A record under construction plus the lines buffered for it
struct OpenRecord {
    record: LogRecord,
    message_lines: Vec<String>,
    file_paths: Vec<String>,
}

impl OpenRecord {
    fn new(commit: &str) -> Self {
        Self {
            record: LogRecord::new(commit),
            message_lines: Vec::new(),
            file_paths: Vec::new(),
        }
    }

    fn seal(self) -> LogRecord {
        let Self {
            mut record,
            message_lines,
            file_paths,
        } = self;

        if !message_lines.is_empty() {
            record.message = message_lines.join("\n");
        }

        if !file_paths.is_empty() {
            match record.stats.as_mut() {
                Some(stats) => stats.files = file_paths,
                None => debug!(
                    commit = %record.commit,
                    discarded = file_paths.len(),
                    "file list without a diffstat summary, discarding paths"
                ),
            }
        }

        record
    }
}

/// Line-driven state machine producing [`LogRecord`]s
///
/// Create one per parse; [`finish`](Self::finish) consumes it.
///
/// ```
/// use gitlog_parse::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.push_line("commit 0c55240e9da30ac4293cc324f1094de2abd3da91");
/// acc.push_line("    initial import");
/// let records = acc.finish();
/// assert_eq!(records[0].message, "initial import");
/// ```
pub struct Accumulator {
    state: State,
    records: Vec<LogRecord>,
}

impl Accumulator {
    /// Create an idle accumulator with no output yet
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            records: Vec::new(),
        }
    }

    /// Classify a line and apply it
    pub fn push_line(&mut self, line: &str) {
        self.apply(classify(line));
    }

    /// Apply an already classified line
    pub fn apply(&mut self, role: LineRole<'_>) {
        match role {
            LineRole::CompactCommit { hash, message } => {
                self.seal();
                self.records.push(LogRecord {
                    commit: hash.to_string(),
                    message: message.to_string(),
                    ..Default::default()
                });
            }
            LineRole::RecordBoundary { commit } => {
                self.seal();
                self.state = State::Open(OpenRecord::new(commit));
            }
            LineRole::MergeParents(parents) => {
                self.with_record("Merge", |r| r.merge_parents = Some(parents.to_string()));
            }
            LineRole::Author(value) => {
                let identity = extract::split_identity(value);
                self.with_record("Author", |r| {
                    if !identity.name.is_empty() {
                        r.author = Some(identity.name.to_string());
                    }
                    r.author_email = identity.email.map(str::to_string);
                });
            }
            LineRole::Committer(value) => {
                let identity = extract::split_identity(value);
                self.with_record("Commit", |r| {
                    if !identity.name.is_empty() {
                        r.commit_by = Some(identity.name.to_string());
                    }
                    r.commit_by_email = identity.email.map(str::to_string);
                });
            }
            LineRole::AuthorDate(date) | LineRole::Date(date) => {
                self.with_record("Date", |r| r.date = Some(date.to_string()));
            }
            LineRole::CommitDate(date) => {
                self.with_record("CommitDate", |r| r.commit_by_date = Some(date.to_string()));
            }
            LineRole::Message(content) => match &mut self.state {
                State::Open(open) => open.message_lines.push(content.to_string()),
                State::Idle => debug!("message line outside of a record, dropping"),
            },
            LineRole::FileStat { path } => match &mut self.state {
                State::Open(open) => open.file_paths.push(path.to_string()),
                State::Idle => debug!(path, "diffstat line outside of a record, dropping"),
            },
            LineRole::SummaryStats(line) => {
                if let Some(stats) = extract::parse_stats(line) {
                    self.with_record("stats summary", |r| r.stats = Some(stats));
                }
            }
            LineRole::Unclassified => trace!("unclassified line skipped"),
        }
    }

    /// Whether a multi-line record is currently being built
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Records sealed so far
    #[must_use]
    pub fn sealed(&self) -> &[LogRecord] {
        &self.records
    }

    /// Seal any pending record and return every record in input order
    #[must_use]
    pub fn finish(mut self) -> Vec<LogRecord> {
        self.seal();
        self.records
    }

    fn seal(&mut self) {
        if let State::Open(open) = mem::replace(&mut self.state, State::Idle) {
            self.records.push(open.seal());
        }
    }

    fn with_record(&mut self, header: &str, update: impl FnOnce(&mut LogRecord)) {
        match &mut self.state {
            State::Open(open) => update(&mut open.record),
            State::Idle => debug!(header, "header line outside of a record, dropping"),
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
