// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser that turns a validated token stream into an [`Ast`].
//!
//! The grammar is one flat statement:
//!
//! ```text
//! statement  := assignment* command argument*
//! assignment := NAME '=' value
//! argument   := option | quoted-string
//! ```
//!
//! Tokens are classified one at a time. Until the command word is seen, a
//! token may be an assignment or the command; afterwards it may be a quoted
//! string or an option. A token no active classifier accepts is dropped.

mod resolve;
mod words;

use crate::ast::Ast;
use crate::token::{Token, TokenKind};

pub use resolve::{resolve_commands, PARSER_DOMAIN};

/// Progress through `Quote Word Quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum QuoteState {
    #[default]
    Outside,
    /// Opening quote seen.
    Opened,
    /// Interior word seen, waiting for the closing quote.
    Inside,
}

/// Single-pass token classifier.
///
/// # Examples
///
/// ```
/// use cchell_shell::{Lexer, NodeKind, Parser};
///
/// let tokens = Lexer::tokenize("FOO=bar ls -la").unwrap();
/// let ast = Parser::parse(&tokens);
///
/// let kinds: Vec<_> = ast.children(ast.root()).map(|(_, n)| n.kind).collect();
/// assert_eq!(kinds, [NodeKind::Assignment, NodeKind::Command, NodeKind::Option]);
/// ```
pub struct Parser<'a> {
    ast: Ast<'a>,
    found_command: bool,
    quote: QuoteState,
}

impl<'a> Parser<'a> {
    /// Build the tree for `tokens`. Parsing itself never fails.
    pub fn parse(tokens: &[Token<'a>]) -> Ast<'a> {
        let mut parser = Parser {
            ast: Ast::new(),
            found_command: false,
            quote: QuoteState::default(),
        };
        for token in tokens {
            parser.parse_token(token);
        }
        parser.ast
    }

    fn parse_token(&mut self, token: &Token<'a>) {
        if !self.found_command && token.kind == TokenKind::Quote {
            // Track pairing so the quote closing a quoted command is not
            // taken as the opening of a string argument.
            self.quote = match self.quote {
                QuoteState::Outside => QuoteState::Inside,
                _ => QuoteState::Outside,
            };
        }

        let accepted = if self.found_command {
            self.string(token) || self.option(token)
        } else if self.assignment(token) {
            true
        } else if self.command(token) {
            self.found_command = true;
            true
        } else {
            false
        };

        if !accepted {
            tracing::debug!(%token, "dropping unclassified token");
        }
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
