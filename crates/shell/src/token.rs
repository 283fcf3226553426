// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::span::SourceLocation;

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A run of non-punctuation text: command, option, assignment, or the
    /// raw interior of a quoted string.
    Word,
    /// One of `(){}[]`.
    Bracket,
    /// One of `'`, `"` or `` ` ``.
    Quote,
    /// `|`
    Pipe,
    /// `$`
    Dollar,
}

impl TokenKind {
    /// Classify a punctuation character, or `None` for anything else.
    pub fn of_punct(ch: char) -> Option<TokenKind> {
        match ch {
            '(' | ')' | '{' | '}' | '[' | ']' => Some(TokenKind::Bracket),
            '|' => Some(TokenKind::Pipe),
            '$' => Some(TokenKind::Dollar),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Word => "word",
            TokenKind::Bracket => "bracket",
            TokenKind::Quote => "quote",
            TokenKind::Pipe => "pipe",
            TokenKind::Dollar => "dollar",
        };
        f.write_str(name)
    }
}

/// A token borrowing its text from the command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub source: SourceLocation,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, source: SourceLocation) -> Self {
        Self { kind, text, source }
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// First character of the token text, if any.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.source, self.kind, self.text)
    }
}

/// Quote characters recognized by the lexer.
pub const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Whether `ch` opens (and closes) a quoted string.
#[inline]
pub fn is_quote(ch: char) -> bool {
    QUOTES.contains(&ch)
}

/// Check if a string is a valid shell variable name.
///
/// Variable names start with `[a-zA-Z_]` and contain only `[a-zA-Z0-9_]`.
pub fn is_valid_variable_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Remove backslash escapes: `\x` becomes `x` and `\\` becomes `\`.
///
/// ```
/// use cchell_shell::token::unescape;
///
/// assert_eq!(unescape(r"my\ file\(1\)"), "my file(1)");
/// assert_eq!(unescape(r"a\\b"), r"a\b");
/// assert_eq!(unescape("plain"), "plain");
/// ```
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
