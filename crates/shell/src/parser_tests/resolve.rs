// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command resolution against an index and a scratch directory.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::parse;
use crate::ast::NodeKind;
use crate::parse_error::ParseError;
use crate::parser::{resolve_commands, PARSER_DOMAIN};
use crate::resolve::testing::{make_executable, make_file};
use crate::resolve::{ExecutableIndex, Resolver};
use crate::terminal::ReadError;

fn index() -> ExecutableIndex {
    [
        ("ls".to_string(), PathBuf::from("/bin/ls")),
        ("cat".to_string(), PathBuf::from("/bin/cat")),
        ("grep".to_string(), PathBuf::from("/bin/grep")),
    ]
    .into_iter()
    .collect()
}

/// Scratch directory with `run.sh` (executable), `notes.txt` (plain) and
/// an empty `sub/` directory.
fn workdir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    make_executable(dir.path(), "run.sh");
    make_file(dir.path(), "notes.txt");
    fs::create_dir(dir.path().join("sub")).unwrap();
    dir
}

fn never(question: &str, _: &[char]) -> Result<char, ReadError> {
    panic!("unexpected question: {question}");
}

/// Resolve `src` answering every question with `answer`. Returns the
/// command text afterwards (or the error) and the questions asked.
fn resolve_with(
    src: &str,
    base: &std::path::Path,
    answer: Result<char, ReadError>,
) -> (Result<String, ParseError>, Vec<String>) {
    let index = index();
    let resolver = Resolver::new(&index, base);
    let mut ast = parse(src);
    let mut asked = Vec::new();
    let mut answer = Some(answer);
    let mut confirm = |question: &str, options: &[char]| {
        assert_eq!(options, ['y', 'n']);
        asked.push(question.to_string());
        answer.take().unwrap_or(Ok('n'))
    };

    let result = resolve_commands(&mut ast, &resolver, &mut confirm).map(|()| {
        let id = ast.command().unwrap();
        ast.node(id).text.to_string()
    });
    (result, asked)
}

fn semantic(err: ParseError) -> crate::diagnostic::Diagnostic {
    match err {
        ParseError::Semantic(d) => d,
        other => panic!("expected a semantic error, got {other:?}"),
    }
}

#[test]
fn indexed_command_needs_no_question() {
    let index = index();
    let resolver = Resolver::new(&index, "/");
    let mut ast = parse("ls -la");
    resolve_commands(&mut ast, &resolver, &mut never).unwrap();
    assert!(!ast.node(ast.command().unwrap()).is_corrected());
}

#[test]
fn escaped_name_is_looked_up_unescaped() {
    let index = index();
    let resolver = Resolver::new(&index, "/");
    let mut ast = parse(r"l\s");
    resolve_commands(&mut ast, &resolver, &mut never).unwrap();
}

#[test]
fn statement_without_command_is_left_alone() {
    let index = index();
    let resolver = Resolver::new(&index, "/");
    let mut ast = parse("A=1");
    resolve_commands(&mut ast, &resolver, &mut never).unwrap();
    assert_eq!(ast.count(NodeKind::Command), 0);
}

#[test]
fn accepted_correction_rewrites_command() {
    let (result, asked) = resolve_with("sl -la", "/".as_ref(), Ok('y'));
    assert_eq!(result.unwrap(), "ls");
    assert_eq!(asked, ["command 'sl' doesn't exist, do you mean 'ls'?"]);
}

#[test]
fn corrected_node_is_owned() {
    let index = index();
    let resolver = Resolver::new(&index, "/");
    let mut ast = parse("gerp x");
    let mut yes = |_: &str, _: &[char]| Ok::<char, ReadError>('y');
    resolve_commands(&mut ast, &resolver, &mut yes).unwrap();

    let node = ast.node(ast.command().unwrap());
    assert_eq!(node.text, "grep");
    assert!(node.is_corrected());
    assert_eq!(node.source.to_string(), "1:1");
}

#[yare::parameterized(
    declined     = { Ok('n') },
    other_answer = { Ok('q') },
    eof          = { Err(ReadError::Eof) },
    interrupted  = { Err(ReadError::Interrupted) },
)]
fn unaccepted_correction_fails(answer: Result<char, ReadError>) {
    let (result, asked) = resolve_with("A=1 sl", "/".as_ref(), answer);
    assert_eq!(asked.len(), 1);

    let diagnostic = semantic(result.unwrap_err());
    assert_eq!(diagnostic.domain(), PARSER_DOMAIN);
    assert_eq!(diagnostic.message(), "command 'sl' doesn't exist");
    assert_eq!(
        diagnostic.annotation(),
        "consider fixing $PATH or installing the program"
    );
    assert_eq!(diagnostic.location().to_string(), "1:5");
    assert_eq!(diagnostic.length(), 2);
}

#[test]
fn far_command_fails_without_question() {
    let (result, asked) = resolve_with("zzzzzz", "/".as_ref(), Ok('y'));
    assert!(asked.is_empty());
    let diagnostic = semantic(result.unwrap_err());
    assert_eq!(diagnostic.message(), "command 'zzzzzz' doesn't exist");
    assert_eq!(diagnostic.length(), 6);
}

#[test]
fn existing_executable_path_resolves() {
    let dir = workdir();
    let (result, asked) = resolve_with("./run.sh", dir.path(), Ok('y'));
    assert_eq!(result.unwrap(), "./run.sh");
    assert!(asked.is_empty());
}

#[test]
fn path_that_is_a_directory_fails() {
    let dir = workdir();
    let (result, _) = resolve_with("./sub", dir.path(), Ok('y'));
    let canonical = fs::canonicalize(dir.path().join("sub")).unwrap();
    let diagnostic = semantic(result.unwrap_err());
    assert_eq!(
        diagnostic.message(),
        format!("path '{}' is not a file", canonical.display())
    );
}

#[cfg(unix)]
#[test]
fn path_without_execute_bit_fails() {
    let dir = workdir();
    let (result, _) = resolve_with("./notes.txt", dir.path(), Ok('y'));
    let canonical = fs::canonicalize(dir.path().join("notes.txt")).unwrap();
    let diagnostic = semantic(result.unwrap_err());
    assert_eq!(
        diagnostic.message(),
        format!("path '{}' is not an executable", canonical.display())
    );
    assert_eq!(
        diagnostic.annotation(),
        format!("consider changing the permission on '{}'", canonical.display())
    );
    assert_eq!(diagnostic.length(), "./notes.txt".len());
}

#[test]
fn misspelled_path_is_corrected() {
    let dir = workdir();
    let (result, asked) = resolve_with("./rnu.sh -x", dir.path(), Ok('y'));
    assert_eq!(result.unwrap(), "./run.sh");
    assert_eq!(
        asked,
        ["executable path './rnu.sh' not found, do you mean './run.sh'?"]
    );
}

#[cfg(unix)]
#[test]
fn corrected_path_is_checked_again() {
    let dir = workdir();
    let (result, asked) = resolve_with("./nxtes.txt", dir.path(), Ok('y'));
    assert_eq!(asked.len(), 1);
    let diagnostic = semantic(result.unwrap_err());
    assert!(diagnostic.message().ends_with("is not an executable"));
}

#[test]
fn declined_path_correction_fails() {
    let dir = workdir();
    let (result, _) = resolve_with("./rnu.sh", dir.path(), Ok('n'));
    let diagnostic = semantic(result.unwrap_err());
    assert_eq!(
        diagnostic.message(),
        "executable path './rnu.sh' doesn't exist"
    );
    assert_eq!(
        diagnostic.annotation(),
        "consider fixing the typo or the directory tree"
    );
}

#[test]
fn far_path_fails_without_question() {
    let dir = workdir();
    let (result, asked) = resolve_with("./zzzzzzzzzzzz", dir.path(), Ok('y'));
    assert!(asked.is_empty());
    assert!(result.is_err());
}
