//! CLI help and version specs

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage: cchell")
        .stdout_has("<COMMAND>");
}

#[test]
fn help_lists_options() {
    cli()
        .args(&["-h"])
        .passes()
        .stdout_has("--output")
        .stdout_has("--dump")
        .stdout_has("--yes")
        .stdout_has("--context-lines")
        .stdout_has("--no-echo");
}

#[test]
fn version_shows_name() {
    cli().args(&["--version"]).passes().stdout_has("cchell ");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    cli()
        .args(&["--frobnicate"])
        .fails()
        .code(2)
        .stderr_has("--frobnicate");
}

#[test]
fn bad_dump_value_is_a_usage_error() {
    cli()
        .args(&["--dump", "bytes", "--", "ls"])
        .fails()
        .code(2)
        .stderr_has("bytes");
}
