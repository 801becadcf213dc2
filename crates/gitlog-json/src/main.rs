// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gitlog-json: convert `git log` output into JSON
//!
//! Reads log text from a file or stdin and prints a JSON array of records.
//!
//! ```text
//! git log --stat | gitlog-json --pretty
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use gitlog_json::cli;
use gitlog_json::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    cli::init_logging(&config);
    debug!(?config, "starting gitlog-json");

    config.validate()?;
    cli::run(&config)
}
