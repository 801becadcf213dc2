// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output assembly
//!
//! Final shaping of accumulated records. Processed output is currently
//! identical to raw output; the step stays separate so the record schema can
//! evolve without touching the accumulator.

use serde::{Deserialize, Serialize};

use crate::record::LogRecord;

/// How accumulated records are handed back to the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Records conformed to the published schema
    #[default]
    Processed,
    /// Records exactly as the accumulator sealed them
    Raw,
}

impl OutputMode {
    /// Pick the mode for a `raw` flag
    #[must_use]
    pub fn from_raw_flag(raw: bool) -> Self {
        if raw { Self::Raw } else { Self::Processed }
    }
}

/// Apply the output mode to sealed records
#[must_use]
pub fn assemble(records: Vec<LogRecord>, mode: OutputMode) -> Vec<LogRecord> {
    match mode {
        OutputMode::Raw => records,
        OutputMode::Processed => process(records),
    }
}

fn process(records: Vec<LogRecord>) -> Vec<LogRecord> {
    records
}
