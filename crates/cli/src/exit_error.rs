// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

/// Exit with a specific status.
///
/// `message` is printed as `Error: ...` unless empty, which is used when
/// the failure has already been reported (a rendered diagnostic) or is not
/// a failure of cchell at all (the launched command's own status).
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Exit with `code`, printing nothing.
    pub fn silent(code: i32) -> Self {
        Self::new(code, "")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
