// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for the lexer, parser and diagnostics.

use std::fmt;

use serde::Serialize;

/// A position in the command text.
///
/// Both fields are 0-based. `column` counts characters (not bytes) from the
/// start of the line, so it can be used directly to indent carets under
/// UTF-8 text.
///
/// The [`Display`](fmt::Display) form is 1-based (`line:column`), which is
/// what users see in diagnostics.
///
/// # Examples
///
/// ```
/// use cchell_shell::SourceLocation;
///
/// let loc = SourceLocation::new(0, 4);
/// assert_eq!(loc.to_string(), "1:5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct SourceLocation {
    /// 0-based line number.
    pub line: u32,
    /// 0-based column, in characters.
    pub column: u32,
}

impl SourceLocation {
    /// Create a location from 0-based line and column.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Return this location shifted right by `columns` characters.
    #[inline]
    pub fn offset(self, columns: usize) -> Self {
        let columns = u32::try_from(columns).unwrap_or(u32::MAX);
        Self {
            line: self.line,
            column: self.column.saturating_add(columns),
        }
    }

    /// 1-based line number for display.
    #[inline]
    pub fn display_line(&self) -> u64 {
        u64::from(self.line) + 1
    }

    /// 1-based column for display.
    #[inline]
    pub fn display_column(&self) -> u64 {
        u64::from(self.column) + 1
    }

    /// Advance past one character of source text.
    #[inline]
    pub(crate) fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}

/// Return the 1-based numbered lines of `text` within `first..=last`.
///
/// Lines past the end of the text are not returned. A trailing newline does
/// not produce an extra empty line.
///
/// # Examples
///
/// ```
/// use cchell_shell::span::visible_lines;
///
/// let lines = visible_lines("a\nb\nc", 2, 9);
/// assert_eq!(lines, vec![(2, "b"), (3, "c")]);
/// ```
pub fn visible_lines(text: &str, first: u64, last: u64) -> Vec<(u64, &str)> {
    text.lines()
        .zip(1u64..)
        .skip_while(|(_, n)| *n < first)
        .take_while(|(_, n)| *n <= last)
        .map(|(line, n)| (n, line))
        .collect()
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
