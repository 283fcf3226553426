// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token-stream validator.
//!
//! Checks bracket balance and quote pairing before the parser runs. The
//! first problem found is fatal for the command line.

use crate::diagnostic::Diagnostic;
use crate::lexer::LEXER_DOMAIN;
use crate::parse_error::ParseError;
use crate::span::SourceLocation;
use crate::token::{Token, TokenKind};

/// Bracket families, indexed by [`family`].
const OPENERS: [char; 3] = ['(', '{', '['];

/// Family index and direction of a bracket character.
fn family(ch: char) -> Option<(usize, bool)> {
    match ch {
        '(' => Some((0, true)),
        ')' => Some((0, false)),
        '{' => Some((1, true)),
        '}' => Some((1, false)),
        '[' => Some((2, true)),
        ']' => Some((2, false)),
        _ => None,
    }
}

/// Validate bracket balance and quote pairing in a token stream.
///
/// Reports, in order of precedence:
/// - the first closing bracket with no open bracket of its family,
/// - the earliest opening bracket left unclosed,
/// - a quote left open at the end of the stream.
///
/// # Examples
///
/// ```
/// use cchell_shell::{validate_tokens, Lexer};
///
/// let tokens = Lexer::tokenize("(foo").unwrap();
/// let err = validate_tokens(&tokens).unwrap_err();
/// assert_eq!(err.diagnostic().message(), "unclosed bracket '(' found.");
///
/// assert!(validate_tokens(&Lexer::tokenize("ls {a} [b]").unwrap()).is_ok());
/// ```
pub fn validate_tokens(tokens: &[Token<'_>]) -> Result<(), ParseError> {
    Validator::default().validate(tokens)
}

#[derive(Default)]
struct Validator<'t, 'a> {
    open: [Vec<SourceLocation>; 3],
    quote: Option<&'t Token<'a>>,
}

impl<'t, 'a> Validator<'t, 'a> {
    fn validate(mut self, tokens: &'t [Token<'a>]) -> Result<(), ParseError> {
        for token in tokens {
            match token.kind {
                TokenKind::Bracket => self.bracket(token)?,
                TokenKind::Quote => self.toggle_quote(token),
                _ => {}
            }
        }
        self.finish()
    }

    fn bracket(&mut self, token: &Token<'a>) -> Result<(), ParseError> {
        let Some(ch) = token.first_char() else {
            return Ok(());
        };
        let Some((family, opening)) = family(ch) else {
            return Ok(());
        };
        if opening {
            self.open[family].push(token.source);
            return Ok(());
        }
        if self.open[family].pop().is_none() {
            return Err(report(
                format!("extra closing bracket '{ch}' found."),
                format!("try removing the '{ch}'."),
                token.source,
            ));
        }
        Ok(())
    }

    fn toggle_quote(&mut self, token: &'t Token<'a>) {
        match self.quote {
            None => self.quote = Some(token),
            Some(open) if open.text == token.text => self.quote = None,
            Some(_) => {}
        }
    }

    fn finish(self) -> Result<(), ParseError> {
        let earliest = self
            .open
            .iter()
            .zip(OPENERS)
            .filter_map(|(stack, ch)| stack.first().map(|loc| (*loc, ch)))
            .min();
        if let Some((loc, ch)) = earliest {
            return Err(report(
                format!("unclosed bracket '{ch}' found."),
                format!("consider adding a closing '{}'.", closer(ch)),
                loc,
            ));
        }
        if let Some(quote) = self.quote {
            return Err(report(
                format!("unclosed quote {} found.", quote.text),
                format!("consider adding a closing {}.", quote.text),
                quote.source,
            ));
        }
        Ok(())
    }
}

fn closer(open: char) -> char {
    match open {
        '(' => ')',
        '{' => '}',
        _ => ']',
    }
}

fn report(message: String, annotation: String, source: SourceLocation) -> ParseError {
    ParseError::Syntax(
        Diagnostic::error()
            .domain(LEXER_DOMAIN)
            .message(message)
            .annotation(annotation)
            .source(source)
            .build(),
    )
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
