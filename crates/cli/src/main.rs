// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cchell - a command-line checker that corrects typos before running

mod color;
mod config;
mod env;
mod exec;
mod exit_error;
mod logging;
mod output;
mod session;
mod tty;

use std::path::PathBuf;

use anyhow::Result;
use cchell_shell::Renderer;
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::color::ColorChoice;
use crate::config::Config;
use crate::output::{Dump, OutputFormat};
use crate::session::Session;

#[derive(Parser)]
#[command(
    name = "cchell",
    version,
    about = "Check a command line, offer typo corrections, then run it"
)]
struct Cli {
    /// Output format for dumps and errors
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,

    /// Print a pipeline stage instead of running the command
    #[arg(long, value_enum)]
    dump: Option<Dump>,

    /// Accept every correction without asking
    #[arg(short = 'y', long)]
    yes: bool,

    /// When to color diagnostics
    #[arg(long, value_enum, default_value_t)]
    color: ColorChoice,

    /// Config file (default: <config dir>/cchell/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Lines of context around the error line
    #[arg(long, value_name = "N")]
    context_lines: Option<u32>,

    /// Do not echo the answer to a correction question
    #[arg(long)]
    no_echo: bool,

    /// Command line to check and run; read from stdin when absent
    #[arg(last = true, value_name = "COMMAND")]
    command: Vec<String>,
}

/// The clap command with styles applied.
fn cli_command() -> clap::Command {
    Cli::command().styles(color::styles())
}

fn main() {
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let matches = cli_command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let _log_guard = logging::setup_logging()?;
    let session = build_session(&cli, Config::load(cli.config.as_deref())?);
    session.run(&cli.command)
}

/// Combine flags with the config file. Flags win.
fn build_session(cli: &Cli, mut config: Config) -> Session {
    if let Some(lines) = cli.context_lines {
        config.theme.context_lines = lines;
    }
    let colored = color::should_colorize(cli.color);
    tracing::debug!(colored, dump = ?cli.dump, yes = cli.yes, "session settings");

    Session {
        format: cli.output,
        dump: cli.dump,
        auto_accept: cli.yes,
        renderer: Renderer::new(config.theme, colored),
        echo: config.prompt.echo && !cli.no_echo,
        tag_color: colored.then_some(config.prompt.tag_color),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
