//! Launch specs
//!
//! A resolved command runs with inherited stdio, and cchell exits with its
//! status.

use crate::prelude::*;

#[test]
fn exact_command_runs() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "greet", "world"])
        .passes()
        .stdout_eq("hello world\n")
        .stderr_eq("");
}

#[test]
fn escapes_are_removed_from_arguments() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "greet", "my\\ friend"])
        .passes()
        .stdout_eq("hello my friend\n");
}

#[test]
fn exit_status_is_propagated() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "CODE=7", "exit-with"])
        .fails()
        .code(7)
        .stderr_eq("");
}

#[test]
fn assignments_reach_the_program() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "GREETING=howdy", "show-env", "GREETING"])
        .passes()
        .stdout_eq("howdy\n");
}

#[test]
fn yes_accepts_corrections() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["-y", "--", "gret", "world"])
        .passes()
        .stdout_eq("hello world\n")
        .stderr_lacks("ask:");
}

#[test]
fn answering_y_accepts_the_correction() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "gret", "world"])
        .stdin("y")
        .passes()
        .stdout_eq("hello world\n")
        .stderr_eq("ask: command 'gret' doesn't exist, do you mean 'greet'? [Y/n] y\n");
}

#[test]
fn enter_accepts_the_default() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "gret", "world"])
        .stdin("\r")
        .passes()
        .stdout_eq("hello world\n");
}

#[test]
fn no_echo_hides_the_answer() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--no-echo", "--", "gret"])
        .stdin("y")
        .passes()
        .stderr_eq("ask: command 'gret' doesn't exist, do you mean 'greet'? [Y/n] ");
}

#[test]
fn answering_n_declines() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "gret", "world"])
        .stdin("n")
        .fails()
        .code(1)
        .stdout_eq("")
        .stderr_has("command 'gret' doesn't exist\n");
}

#[test]
fn no_answer_declines() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "gret"])
        .fails()
        .code(1)
        .stderr_has("consider fixing $PATH or installing the program");
}

#[test]
fn other_bytes_are_ignored() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "gret", "world"])
        .stdin("xq y")
        .passes()
        .stdout_eq("hello world\n");
}

#[test]
fn command_line_from_stdin() {
    let bin = Bin::standard();
    bin.cchell()
        .stdin("greet piped\n")
        .passes()
        .stdout_eq("hello piped\n");
}

#[test]
fn stdin_carries_the_answer_after_the_command_line() {
    let bin = Bin::standard();
    bin.cchell()
        .stdin("gret piped\ny")
        .passes()
        .stdout_eq("hello piped\n");
}

#[test]
fn local_executable_runs() {
    let bin = Bin::standard();
    bin.local("tools/hi.sh", "echo local", 0o755);
    bin.cchell()
        .args(&["--", "./tools/hi.sh"])
        .passes()
        .stdout_eq("local\n");
}

#[test]
fn local_path_typo_is_corrected() {
    let bin = Bin::standard();
    bin.local("tools/hi.sh", "echo local", 0o755);
    bin.cchell()
        .args(&["--", "./tols/hi.sh"])
        .stdin("y")
        .passes()
        .stdout_eq("local\n")
        .stderr_has("do you mean './tools/hi.sh'?");
}

#[test]
fn local_file_must_be_executable() {
    let bin = Bin::standard();
    bin.local("notes.sh", "echo nope", 0o644);
    bin.cchell()
        .args(&["--", "./notes.sh"])
        .fails()
        .code(1)
        .stdout_eq("")
        .stderr_has("is not an executable");
}

#[test]
fn missing_local_path() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--", "./zzz/qqq.sh"])
        .fails()
        .code(1)
        .stderr_has("executable path './zzz/qqq.sh' doesn't exist");
}
