// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI escape sequences: truecolor styles, resets and cursor control.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Full reset of colors and attributes.
pub const RESET: &str = "\x1b[0;0;0m";
/// Reset the foreground color only.
pub const RESET_FG: &str = "\x1b[39m";
/// Reset the background color only.
pub const RESET_BG: &str = "\x1b[49m";
/// Clear bold/dim, underline, blink and reverse while keeping colors.
pub const RESET_ATTRIBUTES: &str = "\x1b[22;24;25;27m";

/// SGR text attributes, combinable with `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes(u8);

impl Attributes {
    pub const NONE: Attributes = Attributes(0);
    pub const BOLD: Attributes = Attributes(1 << 0);
    pub const DIM: Attributes = Attributes(1 << 1);
    pub const UNDERLINE: Attributes = Attributes(1 << 2);
    pub const BLINK: Attributes = Attributes(1 << 3);
    pub const REVERSE: Attributes = Attributes(1 << 4);

    /// SGR parameter for each attribute bit, in emission order.
    const CODES: [(Attributes, u8); 5] = [
        (Attributes::BOLD, 1),
        (Attributes::DIM, 2),
        (Attributes::UNDERLINE, 4),
        (Attributes::BLINK, 5),
        (Attributes::REVERSE, 7),
    ];

    pub const fn contains(self, other: Attributes) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn from_name(name: &str) -> Option<Attributes> {
        match name {
            "bold" => Some(Attributes::BOLD),
            "dim" => Some(Attributes::DIM),
            "underline" => Some(Attributes::UNDERLINE),
            "blink" => Some(Attributes::BLINK),
            "reverse" => Some(Attributes::REVERSE),
            _ => None,
        }
    }

    fn codes(self) -> impl Iterator<Item = u8> {
        Self::CODES
            .into_iter()
            .filter(move |(attr, _)| self.contains(*attr))
            .map(|(_, code)| code)
    }
}

impl BitOr for Attributes {
    type Output = Attributes;

    fn bitor(self, rhs: Attributes) -> Attributes {
        Attributes(self.0 | rhs.0)
    }
}

/// A 24-bit color plus text attributes.
///
/// Colors are applied through [`Color::fg`] or [`Color::bg`], which display
/// as a single SGR sequence:
///
/// ```
/// use cchell_shell::style::{Attributes, Color};
///
/// let red = Color::rgb(220, 50, 47).with(Attributes::BOLD);
/// assert_eq!(red.fg().to_string(), "\x1b[1;38;2;220;50;47m");
/// assert_eq!(red.bg().to_string(), "\x1b[1;48;2;220;50;47m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub attributes: Attributes,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            attributes: Attributes::NONE,
        }
    }

    /// Add attributes to this color.
    pub const fn with(mut self, attributes: Attributes) -> Self {
        self.attributes = Attributes(self.attributes.0 | attributes.0);
        self
    }

    /// Foreground SGR sequence.
    pub fn fg(self) -> Sgr {
        Sgr {
            color: self,
            target: Target::Foreground,
        }
    }

    /// Background SGR sequence.
    pub fn bg(self) -> Sgr {
        Sgr {
            color: self,
            target: Target::Background,
        }
    }

    /// `text` wrapped in this foreground color and a full reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.fg())
    }
}

/// Error from parsing a color specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#rrggbb', got {0:?}")]
    InvalidHex(String),
    #[error("unknown text attribute {0:?}")]
    UnknownAttribute(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `"#rrggbb"` optionally followed by attribute names, e.g.
    /// `"#dc322f bold underline"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let hex = words.next().unwrap_or_default();
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ColorParseError::InvalidHex(hex.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };

        let mut color = Color::rgb(channel(0)?, channel(2)?, channel(4)?);
        for word in words {
            let attr = Attributes::from_name(word)
                .ok_or_else(|| ColorParseError::UnknownAttribute(word.to_string()))?;
            color = color.with(attr);
        }
        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Foreground,
    Background,
}

/// A displayable SGR sequence for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sgr {
    color: Color,
    target: Target,
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\x1b[")?;
        for code in self.color.attributes.codes() {
            write!(f, "{code};")?;
        }
        let target = match self.target {
            Target::Foreground => 38,
            Target::Background => 48,
        };
        let Color { r, g, b, .. } = self.color;
        write!(f, "{target};2;{r};{g};{b}m")
    }
}

/// Cursor and screen control sequences.
///
/// ```
/// use cchell_shell::style::Cursor;
///
/// assert_eq!(Cursor::Left(3).to_string(), "\x1b[3D");
/// assert_eq!(Cursor::MoveTo { row: 1, column: 1 }.to_string(), "\x1b[1;1H");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Up(u16),
    Down(u16),
    Right(u16),
    Left(u16),
    /// Absolute move, 1-based.
    MoveTo { row: u16, column: u16 },
    ClearScreen,
    ClearLine,
    Save,
    Restore,
    Hide,
    Show,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Up(n) => write!(f, "\x1b[{n}A"),
            Cursor::Down(n) => write!(f, "\x1b[{n}B"),
            Cursor::Right(n) => write!(f, "\x1b[{n}C"),
            Cursor::Left(n) => write!(f, "\x1b[{n}D"),
            Cursor::MoveTo { row, column } => write!(f, "\x1b[{row};{column}H"),
            Cursor::ClearScreen => f.write_str("\x1b[2J"),
            Cursor::ClearLine => f.write_str("\x1b[2K"),
            Cursor::Save => f.write_str("\x1b[s"),
            Cursor::Restore => f.write_str("\x1b[u"),
            Cursor::Hide => f.write_str("\x1b[?25l"),
            Cursor::Show => f.write_str("\x1b[?25h"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
