// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::FromArgMatches;
use serial_test::serial;

use super::{build_session, cli_command, format_error, Cli};
use crate::color::ColorChoice;
use crate::config::Config;
use crate::exit_error::ExitError;
use crate::output::{Dump, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    let matches = cli_command().try_get_matches_from(args).unwrap();
    Cli::from_arg_matches(&matches).unwrap()
}

// -- Version and help --------------------------------------------------------

#[test]
fn version_flag() {
    let err = cli_command()
        .try_get_matches_from(["cchell", "--version"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn help_lists_flags() {
    let mut buf = Vec::new();
    cli_command().write_help(&mut buf).unwrap();
    let help = String::from_utf8(buf).unwrap();
    for flag in ["--output", "--dump", "--yes", "--color", "--config", "--no-echo"] {
        assert!(help.contains(flag), "help should list {flag}, got:\n{help}");
    }
}

// -- Command words -----------------------------------------------------------

#[test]
fn command_after_double_dash() {
    let cli = parse(&["cchell", "--", "ls", "-la", "my dir"]);
    assert_eq!(cli.command, ["ls", "-la", "my dir"]);
}

#[test]
fn flags_after_double_dash_belong_to_the_command() {
    let cli = parse(&["cchell", "--", "grep", "--yes", "-o"]);
    assert!(!cli.yes);
    assert_eq!(cli.command, ["grep", "--yes", "-o"]);
}

#[test]
fn no_command_is_empty() {
    let cli = parse(&["cchell"]);
    assert!(cli.command.is_empty());
}

// -- Flags -------------------------------------------------------------------

#[test]
fn defaults() {
    let cli = parse(&["cchell"]);
    assert_eq!(cli.output, OutputFormat::Text);
    assert_eq!(cli.dump, None);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(!cli.yes);
    assert!(!cli.no_echo);
    assert_eq!(cli.config, None);
    assert_eq!(cli.context_lines, None);
}

#[test]
fn all_flags() {
    let cli = parse(&[
        "cchell",
        "-o",
        "json",
        "--dump",
        "plan",
        "-y",
        "--color",
        "never",
        "--config",
        "/tmp/c.toml",
        "--context-lines",
        "4",
        "--no-echo",
        "--",
        "ls",
    ]);
    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(cli.dump, Some(Dump::Plan));
    assert!(cli.yes);
    assert_eq!(cli.color, ColorChoice::Never);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    assert_eq!(cli.context_lines, Some(4));
    assert!(cli.no_echo);
}

#[test]
fn unknown_dump_is_rejected() {
    let err = cli_command()
        .try_get_matches_from(["cchell", "--dump", "bytes"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

// -- Session settings --------------------------------------------------------

#[test]
#[serial]
fn flags_override_config() {
    let cli = parse(&["cchell", "--color", "never", "--context-lines", "0", "--no-echo"]);
    let session = build_session(&cli, Config::default());
    assert_eq!(session.renderer.theme().context_lines, 0);
    assert!(!session.renderer.is_colored());
    assert!(!session.echo);
    assert_eq!(session.tag_color, None);
}

#[test]
#[serial]
fn colored_session_has_a_tag_color() {
    let cli = parse(&["cchell", "--color", "always", "-y"]);
    let config = Config::default();
    let tag = config.prompt.tag_color;
    let session = build_session(&cli, config);
    assert!(session.renderer.is_colored());
    assert!(session.auto_accept);
    assert!(session.echo);
    assert_eq!(session.tag_color, Some(tag));
}

// -- Error formatting --------------------------------------------------------

#[test]
fn format_error_single() {
    let err = anyhow::anyhow!("config missing");
    assert_eq!(format_error(&err), "config missing");
}

#[test]
fn format_error_redundant_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = anyhow::Error::new(io).context("failed to read config: no such file");
    assert_eq!(format_error(&err), "failed to read config: no such file");
}

#[test]
fn format_error_shows_new_causes() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = anyhow::Error::new(io).context("failed to launch '/bin/x'");
    assert_eq!(
        format_error(&err),
        "failed to launch '/bin/x'\n\nCaused by:\n    0: no such file"
    );
}

#[test]
fn silent_exit_formats_empty() {
    let err: anyhow::Error = ExitError::silent(3).into();
    assert_eq!(format_error(&err), "");
    assert_eq!(err.downcast_ref::<ExitError>().map(|e| e.code), Some(3));
}
