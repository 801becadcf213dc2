// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command execution
//!
//! Reads `git log` text, runs the parser and writes JSON. Input and output
//! are passed in as `Read`/`Write` so the whole path runs in tests without
//! touching the process streams.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use gitlog_parse::{GitLogParser, TextParser, parse_bytes, to_json};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config, InputSource};

/// Install the stderr tracing subscriber for the configured log level
pub fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().into()))
        .with_writer(io::stderr)
        .init();
}

/// Run the configured command against the process streams
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, or the output
/// cannot be written.
pub fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match config.input_source() {
        InputSource::Stdin => run_with(config, io::stdin().lock(), &mut out)?,
        InputSource::File(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            run_with(config, file, &mut out)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Run the configured command with explicit input and output
///
/// # Errors
///
/// Returns an error if reading, decoding or writing fails.
pub fn run_with(config: &Config, mut input: impl Read, mut out: impl Write) -> Result<()> {
    let rendered = match config.command {
        Some(Command::Info) => render_info(config.pretty)?,
        None => {
            let mut bytes = Vec::new();
            input
                .read_to_end(&mut bytes)
                .context("Failed to read git log input")?;
            debug!(bytes = bytes.len(), "read input");
            render(&bytes, config)?
        }
    };

    writeln!(out, "{rendered}").context("Failed to write output")?;
    Ok(())
}

/// Parse log bytes and render them as a JSON array
///
/// # Errors
///
/// Returns an error if the input is not UTF-8.
pub fn render(input: &[u8], config: &Config) -> Result<String> {
    let records =
        parse_bytes(input, &config.parse_options()).context("Failed to parse git log input")?;
    info!(records = records.len(), "converted git log");
    Ok(to_json(&records, config.pretty)?)
}

/// Render the parser metadata as JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_info(pretty: bool) -> Result<String> {
    Ok(to_json(GitLogParser.info(), pretty)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const ONELINE: &str = "0c55240e9da30ac4293cc324f1094de2abd3da91 fix bug\n";

    #[test]
    fn test_render_oneline() {
        let json = render(ONELINE.as_bytes(), &Config::default()).expect("render");
        assert_eq!(
            json,
            r#"[{"commit":"0c55240e9da30ac4293cc324f1094de2abd3da91","message":"fix bug"}]"#
        );
    }

    #[test]
    fn test_render_empty_input() {
        let json = render(b"", &Config::default()).expect("render");
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_render_invalid_utf8() {
        let result = render(&[0xff, 0xfe, 0x0a], &Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_render_info() {
        let json = render_info(false).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["name"], "git_log");
        assert_eq!(value["magic_commands"][0], "git log");
    }

    #[test]
    fn test_render_info_pretty_matches_records_format() {
        let pretty = render_info(true).expect("render");
        let compact = render_info(false).expect("render");
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
        let a: serde_json::Value = serde_json::from_str(&pretty).expect("json");
        let b: serde_json::Value = serde_json::from_str(&compact).expect("json");
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_with_writes_trailing_newline() {
        let mut out = Vec::new();
        run_with(&Config::default(), ONELINE.as_bytes(), &mut out).expect("run");
        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_run_with_info_ignores_input() {
        let config = Config {
            command: Some(Command::Info),
            ..Default::default()
        };
        let mut out = Vec::new();
        run_with(&config, "not read".as_bytes(), &mut out).expect("run");
        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.contains("\"git_log\""));
    }
}
