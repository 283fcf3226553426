// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer for cchell command lines.
//!
//! The lexer turns a command string into a flat token stream. Tokens borrow
//! their text from the input and record where they start.
//!
//! - Unescaped whitespace separates words; a newline also advances the line.
//! - A backslash escapes the next character and stays in the token text.
//!   An escaped newline stays inside the word but still advances the line.
//! - `'`, `"` and `` ` `` produce `Quote`, the raw interior as one `Word`
//!   (possibly empty), then the closing `Quote`.
//! - `(){}[]`, `|` and `$` split words into their own tokens.

use crate::diagnostic::Diagnostic;
use crate::parse_error::ParseError;
use crate::span::SourceLocation;
use crate::token::{is_quote, Token, TokenKind};

/// Diagnostic domain for lexing and token-stream validation.
pub const LEXER_DOMAIN: &str = "cchell::lexer";

/// Lexer state over one command string.
///
/// Use [`Lexer::tokenize`] or [`Lexer::tokenize_lossy`] rather than driving
/// it directly.
///
/// # Examples
///
/// ```
/// use cchell_shell::{Lexer, TokenKind};
///
/// let tokens = Lexer::tokenize("echo \"hi there\" | cat").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Word,
///         TokenKind::Quote,
///         TokenKind::Word,
///         TokenKind::Quote,
///         TokenKind::Pipe,
///         TokenKind::Word,
///     ]
/// );
/// assert_eq!(tokens[2].text, "hi there");
/// ```
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    loc: SourceLocation,
    tokens: Vec<Token<'a>>,
    /// Opening quote of a string that never closed.
    unterminated: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            loc: SourceLocation::default(),
            tokens: Vec::with_capacity(src.len() / 2),
            unterminated: None,
        }
    }

    /// Tokenize `src`, failing on an unterminated quote.
    pub fn tokenize(src: &'a str) -> Result<Vec<Token<'a>>, ParseError> {
        let mut lexer = Lexer::new(src);
        lexer.run();
        match lexer.unterminated {
            Some(quote) => Err(ParseError::Lex(
                Diagnostic::error()
                    .domain(LEXER_DOMAIN)
                    .message(format!("unterminated quote {} found.", quote.text))
                    .annotation(format!("consider adding a closing {}.", quote.text))
                    .source(quote.source)
                    .build(),
            )),
            None => Ok(lexer.tokens),
        }
    }

    /// Tokenize `src` without failing.
    ///
    /// An unterminated quote yields the opening `Quote` followed by the rest
    /// of the input as one `Word`, and lexing stops there.
    pub fn tokenize_lossy(src: &'a str) -> Vec<Token<'a>> {
        let mut lexer = Lexer::new(src);
        lexer.run();
        lexer.tokens
    }

    fn run(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else if is_quote(ch) {
                if !self.quoted(ch) {
                    break;
                }
            } else {
                self.word_run();
            }
        }
        tracing::trace!(count = self.tokens.len(), "lexed command line");
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.loc.advance(ch);
        Some(ch)
    }

    fn push(&mut self, kind: TokenKind, start: usize, source: SourceLocation) {
        let src = self.src;
        self.tokens.push(Token::new(kind, &src[start..self.pos], source));
    }

    /// Lex an unquoted run up to unescaped whitespace, a quote or the end of
    /// input, splitting out punctuation.
    fn word_run(&mut self) {
        let mut word: Option<(usize, SourceLocation)> = None;

        while let Some(ch) = self.peek() {
            if ch == '\\' {
                if word.is_none() {
                    word = Some((self.pos, self.loc));
                }
                self.bump();
                self.bump();
                continue;
            }
            if ch.is_whitespace() || is_quote(ch) {
                break;
            }
            if let Some(kind) = TokenKind::of_punct(ch) {
                self.flush_word(&mut word);
                let (start, source) = (self.pos, self.loc);
                self.bump();
                self.push(kind, start, source);
                continue;
            }
            if word.is_none() {
                word = Some((self.pos, self.loc));
            }
            self.bump();
        }

        self.flush_word(&mut word);
    }

    fn flush_word(&mut self, word: &mut Option<(usize, SourceLocation)>) {
        if let Some((start, source)) = word.take() {
            self.push(TokenKind::Word, start, source);
        }
    }

    /// Lex a quoted string starting at `quote`. Returns false when the quote
    /// never closes, after consuming the rest of the input.
    fn quoted(&mut self, quote: char) -> bool {
        let (open, open_loc) = (self.pos, self.loc);
        self.bump();
        self.push(TokenKind::Quote, open, open_loc);

        let (start, source) = (self.pos, self.loc);
        match self.src[start..].find(quote) {
            Some(offset) => {
                let end = start + offset;
                while self.pos < end {
                    self.bump();
                }
                self.push(TokenKind::Word, start, source);

                let close_loc = self.loc;
                self.bump();
                self.push(TokenKind::Quote, end, close_loc);
                true
            }
            None => {
                while self.bump().is_some() {}
                self.push(TokenKind::Word, start, source);
                let src = self.src;
                self.unterminated = Some(Token::new(TokenKind::Quote, &src[open..start], open_loc));
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
