// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gitlog-parse: structured records from human-oriented `git log` output
//!
//! This library crate recognizes record boundaries and field roles across
//! the `oneline`, `short`, `medium`, `full` and `fuller` layouts of
//! `git log` (with optional `--stat` or `--shortstat` sections) without
//! being told which layout is present.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use gitlog_parse::{ParseOptions, parse};
//!
//! let text = "\
//! commit 0c55240e9da30ac4293cc324f1094de2abd3da91
//! Author: Jane Doe <jane@example.com>
//! Date:   Thu Jan 15 10:02:31 2026 +0100
//!
//!     Fix the frobnicator
//! ";
//!
//! let records = parse(text, &ParseOptions::default());
//! assert_eq!(records[0].author.as_deref(), Some("Jane Doe"));
//! assert_eq!(records[0].subject(), "Fix the frobnicator");
//! ```

pub mod accumulator;
pub mod assemble;
pub mod classify;
pub mod error;
pub mod extract;
pub mod parser;
pub mod record;

pub use accumulator::Accumulator;
pub use assemble::OutputMode;
pub use classify::{LineRole, classify};
pub use error::GitLogError;
pub use parser::{GitLogParser, ParseOptions, ParserInfo, TextParser, parse, parse_bytes, to_json};
pub use record::{LogRecord, Stats};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitLogError;
    pub use crate::parser::{GitLogParser, ParseOptions, TextParser, parse};
    pub use crate::record::{LogRecord, Stats};
}
