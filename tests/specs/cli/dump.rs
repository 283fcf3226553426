//! `--dump` specs
//!
//! Dumps print one pipeline stage to stdout and never launch anything.

use crate::prelude::*;

#[test]
fn tokens_as_text() {
    cli()
        .args(&["--dump", "tokens", "--", "ls", "|", "wc"])
        .passes()
        .stdout_eq("1:1 word \"ls\"\n1:4 pipe \"|\"\n1:6 word \"wc\"\n");
}

#[test]
fn tokens_of_unterminated_text() {
    cli()
        .args(&["--dump", "tokens", "--", "echo", "\"hi"])
        .passes()
        .stdout_has("1:1 word \"echo\"")
        .stdout_has("quote");
}

#[test]
fn tokens_as_json() {
    let run = cli()
        .args(&["--dump", "tokens", "-o", "json", "--", "ls"])
        .passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!([
            { "kind": "word", "text": "ls", "source": { "line": 0, "column": 0 } }
        ])
    );
}

#[test]
fn ast_as_text() {
    cli()
        .args(&["--dump", "ast", "--", "FOO=bar", "ls", "-l"])
        .passes()
        .stdout_eq(
            "statement\n\
             ├── assignment \"FOO=bar\" 1:1\n\
             │   ├── identifier \"FOO\" 1:1\n\
             │   └── literal \"bar\" 1:5\n\
             ├── command \"ls\" 1:9\n\
             └── option \"-l\" 1:12\n",
        );
}

#[test]
fn ast_of_quoted_command() {
    cli()
        .args(&["--dump", "ast", "--", "'ls'", "-la"])
        .passes()
        .stdout_has("command \"ls\" 1:2")
        .stdout_has("option \"-la\" 1:6");
}

#[test]
fn ast_skips_resolution() {
    // Unknown commands are fine: the tree is printed before lookup.
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--dump", "ast", "--", "nosuchprogram"])
        .passes()
        .stdout_has("command \"nosuchprogram\"");
}

#[test]
fn ast_reports_syntax_errors() {
    cli()
        .args(&["--dump", "ast", "--", "foo)"])
        .fails()
        .code(1)
        .stderr_has("extra closing bracket ')' found.");
}

#[test]
fn plan_as_text() {
    let bin = Bin::standard();
    let greet = bin.path().canonicalize().unwrap().join("greet");
    bin.cchell()
        .args(&["--dump", "plan", "--", "LANG=C", "greet", "my\\ friend"])
        .passes()
        .stdout_eq(&format!(
            "path: {}\nargv: [\"greet\", \"my friend\"]\nenv:  LANG=C\n",
            greet.display()
        ));
}

#[test]
fn plan_as_json() {
    let bin = Bin::standard();
    let run = bin
        .cchell()
        .args(&["--dump", "plan", "-o", "json", "--", "greet", "-x"])
        .passes();
    let json = run.stdout_json();
    assert_eq!(json["argv"], serde_json::json!(["greet", "-x"]));
    assert_eq!(json["envp"], serde_json::json!([]));
    assert!(json["path"].as_str().unwrap().ends_with("/greet"));
}

#[test]
fn plan_does_not_launch() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--dump", "plan", "--", "CODE=9", "exit-with"])
        .passes()
        .stdout_has("argv: [\"exit-with\"]\nenv:  CODE=9\n");
}

#[test]
fn plan_with_accepted_correction() {
    let bin = Bin::standard();
    bin.cchell()
        .args(&["--dump", "plan", "-y", "--", "gret"])
        .passes()
        .stdout_has("argv: [\"greet\"]");
}
