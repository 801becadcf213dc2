// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gitlog-parse

use thiserror::Error;

/// Errors that can occur around log parsing
///
/// Parsing text itself never fails; these cover the byte-input entry point
/// and JSON rendering of the parsed records.
#[derive(Debug, Error)]
pub enum GitLogError {
    /// Input bytes were not valid UTF-8
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Error serializing records to JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
