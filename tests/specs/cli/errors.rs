//! Diagnostic specs
//!
//! A failing command line prints exactly one diagnostic on stderr, exits 1
//! and launches nothing.

use crate::prelude::*;

#[test]
fn unknown_command() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "nosuchprogram", "-x"])
        .fails()
        .code(1)
        .stderr_eq(
            "error in cchell::parser at argv:1:1\n  \
             command 'nosuchprogram' doesn't exist\n  \
             consider fixing $PATH or installing the program\n",
        );
}

#[test]
fn extra_closing_bracket() {
    cli()
        .args(&["--", "foo)"])
        .fails()
        .code(1)
        .stderr_eq(
            "error in cchell::lexer at argv:1:4\n  \
             extra closing bracket ')' found.\n  \
             try removing the ')'.\n",
        );
}

#[test]
fn unclosed_bracket() {
    cli()
        .args(&["--", "(foo"])
        .fails()
        .code(1)
        .stderr_has("at argv:1:1")
        .stderr_has("unclosed bracket '(' found.");
}

#[test]
fn unterminated_quote() {
    cli()
        .args(&["--", "echo", "\"hi"])
        .fails()
        .code(1)
        .stderr_has("at argv:1:6")
        .stderr_has("unterminated quote \" found.");
}

#[test]
fn assignments_without_command() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "FOO=bar"])
        .fails()
        .code(1)
        .stderr_has("no command to execute");
}

#[test]
fn errors_are_not_prefixed() {
    cli()
        .args(&["--", "foo)"])
        .fails()
        .stderr_lacks("Error:");
}

#[test]
fn piped_errors_name_stdin() {
    cli()
        .stdin("foo)\n")
        .fails()
        .code(1)
        .stderr_has("at stdin:1:4");
}

#[test]
fn errors_as_json() {
    let run = cli().args(&["-o", "json", "--", "foo)"]).fails().code(1);
    let json = run.stderr_json();
    assert_eq!(json["kind"], "syntax");
    assert_eq!(json["diagnostic"]["message"], "extra closing bracket ')' found.");
}

#[test]
fn color_always_adds_escapes() {
    cli()
        .args(&["--color", "always", "--", "foo)"])
        .fails()
        .stderr_has("\x1b[")
        .stderr_has("/* at argv:1:4 */");
}

#[test]
fn color_env_forces_escapes() {
    cli()
        .env("COLOR", "1")
        .args(&["--", "foo)"])
        .fails()
        .stderr_has("\x1b[");
}

#[test]
fn no_color_env_wins_over_color() {
    cli()
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .args(&["--", "foo)"])
        .fails()
        .stderr_lacks("\x1b[");
}
