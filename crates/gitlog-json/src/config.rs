// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the gitlog-json command
//!
//! This module provides the command-line configuration, including the input
//! source, output shape and logging options.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gitlog_parse::ParseOptions;

/// gitlog-json - convert `git log` output into JSON
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gitlog-json")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to converting input)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File containing `git log` output
    ///
    /// Reads stdin when omitted or set to `-`.
    #[arg(value_name = "INPUT", env = "GITLOG_JSON_INPUT")]
    pub input: Option<PathBuf>,

    /// Raw output, skipping final record processing
    #[arg(short, long, default_value = "false")]
    pub raw: bool,

    /// Pretty-print the JSON output
    #[arg(short, long, default_value = "false")]
    pub pretty: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the JSON on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress compatibility warnings and info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print parser metadata as JSON
    Info,
}

/// Where log text is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Config {
    /// Get the input source, defaulting to stdin
    #[must_use]
    pub fn input_source(&self) -> InputSource {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    /// Parse options derived from the flags
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            raw: self.raw,
            quiet: self.quiet,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the input path is given but does not exist or is
    /// not a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let InputSource::File(path) = self.input_source() {
            if !path.exists() {
                return Err(ConfigError::InputNotFound(path));
            }
            if !path.is_file() {
                return Err(ConfigError::InputNotFile(path));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}
