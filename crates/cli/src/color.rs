// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

use clap::builder::styling::{AnsiColor, Styles};
use clap::ValueEnum;

/// The `--color` flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Always,
    Never,
    #[default]
    Auto,
}

/// Determine if diagnostics should be colored.
///
/// Priority: `--color always|never` → `NO_COLOR=1` disables → `COLOR=1`
/// forces → stderr TTY check.
pub fn should_colorize(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => auto_colorize(std::io::stderr().is_terminal()),
    }
}

fn auto_colorize(is_tty: bool) -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    is_tty
}

/// Help styles, plain unless color is enabled by the environment.
pub fn styles() -> Styles {
    if !auto_colorize(std::io::stdout().is_terminal()) {
        return Styles::plain();
    }
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::White.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
