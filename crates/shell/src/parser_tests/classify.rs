// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token classification into assignments, the command and its arguments.

use super::{kinds, parse, texts};
use crate::ast::NodeKind;
use crate::parser::words::is_command_word;

#[test]
fn assignment_command_option() {
    let ast = parse("FOO=bar ls -la");
    assert_eq!(
        kinds(&ast),
        [NodeKind::Assignment, NodeKind::Command, NodeKind::Option]
    );
    assert_eq!(texts(&ast), ["FOO=bar", "ls", "-la"]);

    let (assignment, _) = ast.top_level(NodeKind::Assignment).next().unwrap();
    let children: Vec<_> = ast
        .children(assignment)
        .map(|(_, n)| (n.kind, n.text.to_string(), n.source.to_string()))
        .collect();
    assert_eq!(
        children,
        [
            (NodeKind::Identifier, "FOO".to_string(), "1:1".to_string()),
            (NodeKind::Literal, "bar".to_string(), "1:5".to_string()),
        ]
    );
}

#[test]
fn every_node_points_at_its_parent() {
    let ast = parse("A=1 ls --x=y");
    for (id, node) in ast.iter().skip(1) {
        let parent = node.parent().unwrap();
        assert!(ast.node(parent).children().contains(&id));
    }
}

#[test]
fn option_with_value_is_split() {
    let ast = parse("ls --color=auto");
    let (option, node) = ast.top_level(NodeKind::Option).next().unwrap();
    assert_eq!(node.text, "--color=auto");
    assert_eq!(ast.key_value(option), Some(("--color", "auto")));

    let sources: Vec<_> = ast
        .children(option)
        .map(|(_, n)| (n.kind, n.source.to_string()))
        .collect();
    assert_eq!(
        sources,
        [
            (NodeKind::Identifier, "1:4".to_string()),
            (NodeKind::Parameter, "1:12".to_string()),
        ]
    );
}

#[test]
fn plain_option_has_no_children() {
    let ast = parse("ls -l");
    let (option, _) = ast.top_level(NodeKind::Option).next().unwrap();
    assert!(ast.node(option).children().is_empty());
    assert_eq!(ast.key_value(option), None);
}

#[test]
fn assignment_after_command_is_an_option() {
    let ast = parse("env FOO=bar");
    assert_eq!(kinds(&ast), [NodeKind::Command, NodeKind::Option]);
    let (option, _) = ast.top_level(NodeKind::Option).next().unwrap();
    assert_eq!(ast.key_value(option), Some(("FOO", "bar")));
}

#[test]
fn assignments_without_command() {
    let ast = parse("A=1 B=");
    assert_eq!(kinds(&ast), [NodeKind::Assignment, NodeKind::Assignment]);
    assert_eq!(ast.command(), None);
    let (second, _) = ast.top_level(NodeKind::Assignment).nth(1).unwrap();
    assert_eq!(ast.key_value(second), Some(("B", "")));
}

#[yare::parameterized(
    double = { r#"echo "hi there" x"#, "hi there" },
    single = { "echo 'a b' x", "a b" },
    back   = { "echo `a` x", "a" },
    empty  = { "echo \"\" x", "" },
)]
fn quoted_string_becomes_one_option(src: &str, interior: &str) {
    let ast = parse(src);
    assert_eq!(
        kinds(&ast),
        [NodeKind::Command, NodeKind::Option, NodeKind::Option]
    );
    assert_eq!(texts(&ast), ["echo", interior, "x"]);
}

#[test]
fn quoted_string_source_is_interior() {
    let ast = parse(r#"echo "hi""#);
    let (_, node) = ast.top_level(NodeKind::Option).next().unwrap();
    assert_eq!(node.source.to_string(), "1:7");
}

#[test]
fn quoted_command_word_is_the_command() {
    let ast = parse("'ls' -la");
    assert_eq!(kinds(&ast), [NodeKind::Command, NodeKind::Option]);
    assert_eq!(texts(&ast), ["ls", "-la"]);

    let ast = parse("'ls' --color=auto");
    let (option, _) = ast.top_level(NodeKind::Option).next().unwrap();
    assert_eq!(ast.key_value(option), Some(("--color", "auto")));
}

#[test]
fn option_before_command_is_dropped() {
    let ast = parse("-la ls");
    assert_eq!(kinds(&ast), [NodeKind::Command]);
    assert_eq!(texts(&ast), ["ls"]);
}

#[yare::parameterized(
    digit_argument = { "ls 123", &["ls"] },
    pipe           = { "ls | grep", &["ls", "grep"] },
    dollar         = { "echo $HOME", &["echo", "HOME"] },
    brackets       = { "echo (a)", &["echo", "a"] },
    bad_name       = { "=x ls", &["ls"] },
    path_arg       = { "cat /etc/hosts", &["cat"] },
)]
fn unclassified_tokens_are_dropped(src: &str, expected: &[&str]) {
    let ast = parse(src);
    assert_eq!(texts(&ast), expected);
}

#[test]
fn first_command_word_wins() {
    let ast = parse("ls cat");
    assert_eq!(kinds(&ast), [NodeKind::Command, NodeKind::Option]);
    assert_eq!(ast.count(NodeKind::Command), 1);
}

#[test]
fn local_path_command() {
    let ast = parse("./build/run.sh -v");
    assert_eq!(texts(&ast), ["./build/run.sh", "-v"]);
    assert_eq!(kinds(&ast)[0], NodeKind::Command);
}

#[test]
fn empty_input_is_bare_statement() {
    let ast = parse("");
    assert_eq!(ast.len(), 1);
    assert!(kinds(&ast).is_empty());
}

#[test]
fn text_is_borrowed_from_source() {
    let ast = parse("ls -l");
    assert!(ast.iter().all(|(_, node)| !node.is_corrected()));
}

#[yare::parameterized(
    simple          = { "ls", true },
    dashed          = { "git-lfs", true },
    dotted          = { "a.out", true },
    underscored     = { "run_tests", true },
    digits          = { "7z", true },
    local           = { "./run.sh", true },
    local_nested    = { "./bin/tool", true },
    escaped_paren   = { r"a\(b", true },
    escaped_dollar  = { r"\$x", true },
    slash_not_local = { "bin/tool", false },
    bare_prefix     = { "./", false },
    empty           = { "", false },
    paren           = { "a(b", false },
    dollar          = { "$x", false },
    equals          = { "a=b", false },
    escaped_space   = { r"a\ b", false },
    leading_dash    = { "-la", false },
    local_dash      = { "./-x", false },
)]
fn command_words(text: &str, expected: bool) {
    assert_eq!(is_command_word(text), expected);
}
