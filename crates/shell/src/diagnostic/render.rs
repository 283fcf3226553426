// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic rendering, colored or plain.

use std::fmt::Write;

use super::{Diagnostic, Theme};
use crate::span::visible_lines;
use crate::style::{RESET, RESET_ATTRIBUTES};

/// Renders diagnostics against the raw command text.
///
/// Colorless output is a three-line summary suitable for logs and pipes:
///
/// ```text
/// error in cchell::parser at argv:1:1
///   command 'sl' doesn't exist
///   consider fixing $PATH or installing the program
/// ```
///
/// Colored output shows a header, a `/* at file:line:col */` banner styled
/// as a source line, a window of context lines with a gutter and
/// alternating backgrounds, the highlighted span, and a caret row followed
/// by the annotation.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
    colored: bool,
}

impl Renderer {
    pub fn new(theme: Theme, colored: bool) -> Self {
        Self { theme, colored }
    }

    pub fn colorless() -> Self {
        Self::new(Theme::default(), false)
    }

    pub fn colored(theme: Theme) -> Self {
        Self::new(theme, true)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Render `diag` against `raw`, labelling the location with `file`.
    pub fn render(&self, diag: &Diagnostic, raw: &str, file: &str) -> String {
        if self.colored {
            ColoredRender::new(&self.theme, diag, raw, file).finish()
        } else {
            render_colorless(diag, file)
        }
    }
}

fn render_colorless(diag: &Diagnostic, file: &str) -> String {
    let loc = diag.location();
    format!(
        "{} in {} at {}:{}:{}\n  {}\n  {}\n",
        diag.severity(),
        diag.domain(),
        file,
        loc.display_line(),
        loc.display_column(),
        diag.message(),
        diag.annotation(),
    )
}

fn digits(mut n: u64) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Split `s` after `chars` characters (clamped to the string length).
fn split_chars(s: &str, chars: usize) -> (&str, &str) {
    let at = s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}

/// One colored rendering in progress.
struct ColoredRender<'t, 'd> {
    theme: &'t Theme,
    diag: &'d Diagnostic,
    out: String,
    gutter: usize,
    width: usize,
}

impl<'t, 'd> ColoredRender<'t, 'd> {
    fn new(theme: &'t Theme, diag: &'d Diagnostic, raw: &str, file: &str) -> Self {
        let loc = diag.location();
        let error_line = loc.display_line();
        let extra = u64::from(theme.context_lines);
        let first = error_line.saturating_sub(extra).max(1);
        let lines = visible_lines(raw, first, error_line + extra);

        let widest = lines.last().map_or(error_line, |(n, _)| *n).max(error_line);
        let gutter = digits(widest) + 1;

        let banner = format!(
            "/* at {}:{}:{} */",
            file,
            loc.display_line(),
            loc.display_column()
        );
        let longest = lines
            .iter()
            .map(|(_, line)| line.chars().count())
            .max()
            .unwrap_or(0);
        let width = longest.max(banner.chars().count()) + theme.right_padding + gutter;

        let mut render = Self {
            theme,
            diag,
            out: String::new(),
            gutter,
            width,
        };
        render.header();
        render.banner(&banner);
        for (number, line) in lines {
            render.line(number, line, number == error_line);
        }
        render.annotation();
        render
    }

    fn finish(self) -> String {
        self.out
    }

    fn header(&mut self) {
        let tag = self.theme.severity_color(self.diag.severity());
        let _ = write!(self.out, "{}{}{RESET}", tag.fg(), self.diag.severity());
        if !self.diag.domain().is_empty() {
            let _ = write!(
                self.out,
                " at {}{}{RESET}",
                self.theme.domain_color.fg(),
                self.diag.domain()
            );
        }
        let _ = writeln!(self.out, ": {}", self.diag.message());
    }

    fn banner(&mut self, banner: &str) {
        let content = format!("{}{banner}", self.theme.source_color.fg());
        self.row(None, &content, banner.chars().count());
    }

    fn line(&mut self, number: u64, line: &str, is_error_line: bool) {
        let code = self.theme.code_color.fg();
        let content = if is_error_line {
            let (left, rest) = split_chars(line, self.diag.location().column as usize);
            let (span, tail) = split_chars(rest, self.diag.length());
            format!(
                "{code}{left}{RESET_ATTRIBUTES}{}{span}{RESET_ATTRIBUTES}{code}{tail}",
                self.theme.error_code_color.fg()
            )
        } else {
            format!("{code}{line}")
        };
        self.row(Some(number), &content, line.chars().count());
    }

    /// Emit one gutter + separator + content row, padded to the shared
    /// width. `visible_len` is the printable length of `content`.
    fn row(&mut self, number: Option<u64>, content: &str, visible_len: usize) {
        let background = match number {
            Some(n) if n % 2 != 0 => self.theme.line_color,
            _ => self.theme.alt_line_color,
        };
        let gutter = match number {
            Some(n) => format!("{n:>width$}", width = self.gutter),
            None => " ".repeat(self.gutter),
        };
        let pad = self.width.saturating_sub(visible_len);
        let _ = writeln!(
            self.out,
            "{}{}{gutter} {RESET_ATTRIBUTES}{}| {RESET_ATTRIBUTES}{content}{}{RESET}",
            background.bg(),
            self.theme.line_number_color.fg(),
            self.theme.separator_color.fg(),
            " ".repeat(pad),
        );
    }

    fn annotation(&mut self) {
        let indent = " ".repeat(self.gutter + 3 + self.diag.location().column as usize);
        let _ = writeln!(
            self.out,
            "{indent}{}{}{RESET}",
            self.theme.underline_color.fg(),
            "^".repeat(self.diag.length())
        );
        let _ = writeln!(self.out, "{indent}{}", self.diag.annotation());
    }
}
