// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git log parsing entry points
//!
//! This module ties the classifier, accumulator and assembler together and
//! exposes them through the [`TextParser`] contract shared by every text
//! parser in the toolkit.

use serde::Serialize;
use tracing::{debug, warn};

use crate::accumulator::Accumulator;
use crate::assemble::{OutputMode, assemble};
use crate::error::GitLogError;
use crate::record::LogRecord;

/// Options accepted by every parse call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Return records as sealed by the accumulator, skipping output processing
    pub raw: bool,
    /// Suppress non-fatal compatibility warnings
    pub quiet: bool,
}

impl ParseOptions {
    /// Enable raw output
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Suppress compatibility warnings
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Output mode selected by these options
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_raw_flag(self.raw)
    }
}

/// Descriptive metadata about a parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserInfo {
    /// Short parser name
    pub name: &'static str,
    /// Parser version
    pub version: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Platforms whose command output the parser understands
    pub compatible: &'static [&'static str],
    /// Commands whose output this parser handles
    pub magic_commands: &'static [&'static str],
}

impl ParserInfo {
    /// Check whether a platform name is in the compatible list
    #[must_use]
    pub fn supports(&self, platform: &str) -> bool {
        self.compatible.iter().any(|p| *p == platform)
    }
}

/// Uniform contract for turning command output into records
pub trait TextParser {
    /// Record type produced by the parser
    type Record;

    /// Metadata describing the parser
    fn info(&self) -> &'static ParserInfo;

    /// Parse the complete text of a command's output
    fn parse(&self, text: &str, options: &ParseOptions) -> Vec<Self::Record>;
}

static GIT_LOG_INFO: ParserInfo = ParserInfo {
    name: "git_log",
    version: env!("CARGO_PKG_VERSION"),
    description: "`git log` command parser",
    compatible: &["linux", "darwin", "cygwin", "win32", "aix", "freebsd"],
    magic_commands: &["git log"],
};

/// Parser for `git log` output in the `oneline`, `short`, `medium`, `full`
/// and `fuller` layouts, with optional `--stat` or `--shortstat` sections
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLogParser;

impl TextParser for GitLogParser {
    type Record = LogRecord;

    fn info(&self) -> &'static ParserInfo {
        &GIT_LOG_INFO
    }

    fn parse(&self, text: &str, options: &ParseOptions) -> Vec<LogRecord> {
        check_compatibility(self.info(), current_platform(), options.quiet);

        if text.trim().is_empty() {
            debug!("no data to parse");
            return Vec::new();
        }

        let mut accumulator = Accumulator::new();
        for line in text.lines() {
            accumulator.push_line(line);
        }
        let records = accumulator.finish();
        debug!(records = records.len(), "parsed git log");

        assemble(records, options.output_mode())
    }
}

/// Parse `git log` text into records
///
/// # Example
///
/// ```
/// use gitlog_parse::{ParseOptions, parse};
///
/// let text = "0c55240e9da30ac4293cc324f1094de2abd3da91 fix bug";
/// let records = parse(text, &ParseOptions::default().quiet());
/// assert_eq!(records[0].message, "fix bug");
/// ```
#[must_use]
pub fn parse(text: &str, options: &ParseOptions) -> Vec<LogRecord> {
    GitLogParser.parse(text, options)
}

/// Parse `git log` output held as raw bytes
///
/// # Errors
///
/// Returns `GitLogError::InvalidUtf8` if the bytes are not valid UTF-8.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Vec<LogRecord>, GitLogError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse(text, options))
}

/// Render records, or any other serializable output such as [`ParserInfo`],
/// as JSON
///
/// # Errors
///
/// Returns `GitLogError::Json` if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, GitLogError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Name of the running platform, spelled the way parser metadata lists it
#[must_use]
pub fn current_platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}

/// Warn when a parser is used on a platform it was not written for
///
/// Returns whether the platform is supported. Never fails the parse.
pub fn check_compatibility(info: &ParserInfo, platform: &str, quiet: bool) -> bool {
    let supported = info.supports(platform);
    if !supported && !quiet {
        warn!(
            parser = info.name,
            platform,
            compatible = ?info.compatible,
            "parser is not compatible with this platform, results may be incorrect"
        );
    }
    supported
}
