// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::ffi::OsString;
use std::path::PathBuf;

// --- Executables ---

/// Raw `$PATH`, if set.
pub fn path_var() -> Option<OsString> {
    std::env::var_os("PATH")
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

// --- Config ---

/// Config file override: CCHELL_CONFIG
pub fn config_file() -> Option<PathBuf> {
    std::env::var_os("CCHELL_CONFIG")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Logging ---

/// Log filter directives: CCHELL_LOG (EnvFilter syntax)
pub fn log_filter() -> Option<String> {
    std::env::var("CCHELL_LOG").ok().filter(|s| !s.is_empty())
}

/// Log to this file instead of stderr: CCHELL_LOG_FILE
pub fn log_file() -> Option<PathBuf> {
    std::env::var_os("CCHELL_LOG_FILE")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
