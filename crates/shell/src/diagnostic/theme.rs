// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Colors and layout parameters for colored diagnostics.

use serde::Deserialize;

use super::Severity;
use crate::style::{Attributes, Color};

/// Everything that controls how a colored diagnostic looks.
///
/// Deserializes from a partial table: missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub error_color: Color,
    pub warning_color: Color,
    pub note_color: Color,
    /// Background of odd-numbered lines.
    pub line_color: Color,
    /// Background of even-numbered lines and the location banner.
    pub alt_line_color: Color,
    pub line_number_color: Color,
    pub separator_color: Color,
    pub underline_color: Color,
    /// Foreground of the highlighted span on the error line.
    pub error_code_color: Color,
    pub code_color: Color,
    pub domain_color: Color,
    /// Foreground of the `/* at file:line:col */` banner.
    pub source_color: Color,
    /// Lines of context shown above and below the error line.
    pub context_lines: u32,
    /// Extra spaces after the longest line, so backgrounds form a block.
    pub right_padding: usize,
}

impl Theme {
    /// Tag color for a severity.
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Error => self.error_color,
            Severity::Warning => self.warning_color,
            Severity::Note => self.note_color,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            error_color: Color::rgb(220, 50, 47).with(Attributes::BOLD),
            warning_color: Color::rgb(181, 137, 0).with(Attributes::BOLD),
            note_color: Color::rgb(38, 139, 210).with(Attributes::BOLD),
            line_color: Color::rgb(30, 31, 44),
            alt_line_color: Color::rgb(21, 22, 30).with(Attributes::DIM),
            line_number_color: Color::rgb(193, 195, 211).with(Attributes::DIM),
            separator_color: Color::rgb(100, 105, 140),
            underline_color: Color::rgb(220, 50, 47).with(Attributes::BOLD),
            error_code_color: Color::rgb(220, 50, 47).with(Attributes::BOLD),
            code_color: Color::rgb(255, 255, 255),
            domain_color: Color::rgb(116, 107, 215).with(Attributes::BOLD),
            source_color: Color::rgb(150, 150, 150).with(Attributes::DIM),
            context_lines: 2,
            right_padding: 5,
        }
    }
}
