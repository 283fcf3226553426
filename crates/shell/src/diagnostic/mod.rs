// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source-anchored diagnostics.
//!
//! A [`Diagnostic`] is built once through [`DiagnosticBuilder`] and is
//! immutable afterwards. It does not hold the source text: the caller hands
//! the raw command string and a file label to a [`Renderer`] at the point of
//! reporting.
//!
//! ```
//! use cchell_shell::{Diagnostic, Renderer, SourceLocation};
//!
//! let diag = Diagnostic::error()
//!     .domain("cchell::lexer")
//!     .message("extra closing bracket ')' found.")
//!     .annotation("try removing the ')'.")
//!     .source(SourceLocation::new(0, 3))
//!     .build();
//!
//! let out = Renderer::colorless().render(&diag, "foo)", "argv");
//! assert!(out.starts_with("error in cchell::lexer at argv:1:4\n"));
//! ```

mod render;
mod theme;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::span::SourceLocation;

pub use render::Renderer;
pub use theme::Theme;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered-on-demand report about a location in the command text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{severity} in {domain} at {location}: {message}")]
pub struct Diagnostic {
    severity: Severity,
    domain: String,
    message: String,
    annotation: String,
    // thiserror treats a field named `source` as the error source; this one
    // is a location, so it is stored under another name.
    #[serde(rename = "source")]
    location: SourceLocation,
    length: usize,
}

impl Diagnostic {
    /// Start building a diagnostic of the given severity.
    pub fn builder(severity: Severity) -> DiagnosticBuilder {
        DiagnosticBuilder::new(severity)
    }

    pub fn error() -> DiagnosticBuilder {
        DiagnosticBuilder::new(Severity::Error)
    }

    pub fn warning() -> DiagnosticBuilder {
        DiagnosticBuilder::new(Severity::Warning)
    }

    pub fn note() -> DiagnosticBuilder {
        DiagnosticBuilder::new(Severity::Note)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    /// Where in the command text the diagnostic points.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Number of characters highlighted, starting at [`Self::location`].
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Builder for [`Diagnostic`].
///
/// Fields left unset default to empty strings, location `1:1` and a length
/// of one character.
#[derive(Debug, Clone)]
#[must_use]
pub struct DiagnosticBuilder {
    diag: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn new(severity: Severity) -> Self {
        Self {
            diag: Diagnostic {
                severity,
                domain: String::new(),
                message: String::new(),
                annotation: String::new(),
                location: SourceLocation::default(),
                length: 1,
            },
        }
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.diag.domain = domain.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.diag.message = message.into();
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.diag.annotation = annotation.into();
        self
    }

    pub fn source(mut self, location: SourceLocation) -> Self {
        self.diag.location = location;
        self
    }

    /// Highlight length in characters. Zero is bumped to one so the caret
    /// row always shows something.
    pub fn length(mut self, length: usize) -> Self {
        self.diag.length = length.max(1);
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diag
    }
}

#[cfg(test)]
#[path = "../diagnostic_tests/mod.rs"]
mod tests;
