// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gitlog-json library
//!
//! This module exports the command-line plumbing of gitlog-json for use in
//! integration tests and as a library.

pub mod cli;
pub mod config;
