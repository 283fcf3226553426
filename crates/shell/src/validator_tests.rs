// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Lexer;

fn check(input: &str) -> Result<(), ParseError> {
    validate_tokens(&Lexer::tokenize_lossy(input))
}

fn failure(input: &str) -> (String, String, (u32, u32)) {
    let err = check(input).unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)), "{err:?}");
    let diag = err.diagnostic();
    assert_eq!(diag.domain(), "cchell::lexer");
    (
        diag.message().to_string(),
        diag.annotation().to_string(),
        (diag.location().line, diag.location().column),
    )
}

// =============================================================================
// Valid Cases
// =============================================================================

#[yare::parameterized(
    empty          = { "" },
    plain          = { "ls -la" },
    balanced       = { "echo (a) {b} [c]" },
    nested         = { "x ({[]})" },
    quoted_bracket = { "echo ')'" },
    paired_quotes  = { "a 'b' \"c\" `d`" },
)]
fn valid(input: &str) {
    assert!(check(input).is_ok());
}

// =============================================================================
// Brackets
// =============================================================================

#[test]
fn extra_closing_bracket() {
    let (message, annotation, at) = failure("foo)");
    assert_eq!(message, "extra closing bracket ')' found.");
    assert_eq!(annotation, "try removing the ')'.");
    assert_eq!(at, (0, 3));
}

#[test]
fn unclosed_bracket() {
    let (message, annotation, at) = failure("(foo");
    assert_eq!(message, "unclosed bracket '(' found.");
    assert_eq!(annotation, "consider adding a closing ')'.");
    assert_eq!(at, (0, 0));
}

#[test]
fn closing_bracket_of_other_family_is_extra() {
    let (message, _, at) = failure("(a]");
    assert_eq!(message, "extra closing bracket ']' found.");
    assert_eq!(at, (0, 2));
}

#[test]
fn extra_closer_wins_over_unclosed() {
    let (message, _, _) = failure("( }");
    assert_eq!(message, "extra closing bracket '}' found.");
}

#[test]
fn earliest_unclosed_opener_is_reported() {
    let (message, _, at) = failure("a [ b { c (");
    assert_eq!(message, "unclosed bracket '[' found.");
    assert_eq!(at, (0, 2));

    let (_, _, at) = failure("( (x)");
    assert_eq!(at, (0, 0));
}

#[test]
fn unclosed_opener_on_later_line() {
    let (_, _, at) = failure("ok\n  {x");
    assert_eq!(at, (1, 2));
}

// =============================================================================
// Quotes
// =============================================================================

#[test]
fn unclosed_quote_in_lossy_stream() {
    let (message, annotation, at) = failure("echo \"abc");
    assert_eq!(message, "unclosed quote \" found.");
    assert_eq!(annotation, "consider adding a closing \".");
    assert_eq!(at, (0, 5));
}

#[test]
fn only_matching_quote_closes() {
    let tokens = [
        Token::new(TokenKind::Quote, "'", SourceLocation::new(0, 0)),
        Token::new(TokenKind::Quote, "\"", SourceLocation::new(0, 1)),
    ];
    let err = validate_tokens(&tokens).unwrap_err();
    assert_eq!(err.diagnostic().message(), "unclosed quote ' found.");
}

#[test]
fn unclosed_bracket_reported_before_quote() {
    let (message, _, _) = failure("(a '");
    assert_eq!(message, "unclosed bracket '(' found.");
}
