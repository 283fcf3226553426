// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word classifiers: assignments, commands, quoted strings and options.

use super::{Parser, QuoteState};
use crate::ast::{NodeId, NodeKind};
use crate::token::{is_valid_variable_name, Token, TokenKind};

/// Characters a command word may contain only right after a backslash.
const RESERVED: &str = "\"'`(){}[]<>/$|";

fn is_command_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-' | '\\')
}

/// Whether `text` can name a command: `[A-Za-z0-9_.-]` characters not
/// starting with `-`, with reserved characters allowed after a backslash,
/// or a `./` path that may additionally contain `/`.
pub(crate) fn is_command_word(text: &str) -> bool {
    let (local, body) = match text.strip_prefix("./") {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() || body.starts_with('-') {
        return false;
    }

    let mut prev = None;
    for ch in body.chars() {
        let ok = is_command_char(ch)
            || (local && ch == '/')
            || (prev == Some('\\') && RESERVED.contains(ch));
        if !ok {
            return false;
        }
        prev = Some(ch);
    }
    true
}

fn is_option_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '-'
}

impl<'a> Parser<'a> {
    /// `NAME=value` before the command.
    pub(super) fn assignment(&mut self, token: &Token<'a>) -> bool {
        if token.kind != TokenKind::Word {
            return false;
        }
        let Some((name, _)) = token.text.split_once('=') else {
            return false;
        };
        if !is_valid_variable_name(name) {
            return false;
        }

        let root = self.ast.root();
        let id = self
            .ast
            .push(root, NodeKind::Assignment, token.text, token.source);
        self.split_key_value(id, token, NodeKind::Identifier, NodeKind::Literal);
        true
    }

    pub(super) fn command(&mut self, token: &Token<'a>) -> bool {
        if token.kind != TokenKind::Word || !is_command_word(token.text) {
            return false;
        }
        let root = self.ast.root();
        self.ast
            .push(root, NodeKind::Command, token.text, token.source);
        tracing::debug!(command = token.text, "found command word");
        true
    }

    /// Collapse `Quote Word Quote` into one option holding the interior.
    pub(super) fn string(&mut self, token: &Token<'a>) -> bool {
        match (self.quote, token.kind) {
            (QuoteState::Outside, TokenKind::Quote) => {
                self.quote = QuoteState::Opened;
                true
            }
            (QuoteState::Opened, TokenKind::Word) => {
                let root = self.ast.root();
                self.ast
                    .push(root, NodeKind::Option, token.text, token.source);
                self.quote = QuoteState::Inside;
                true
            }
            (QuoteState::Opened | QuoteState::Inside, TokenKind::Quote) => {
                self.quote = QuoteState::Outside;
                true
            }
            (QuoteState::Outside, _) => false,
            _ => {
                self.quote = QuoteState::Outside;
                false
            }
        }
    }

    /// An argument word, split into key and value at the first `=`.
    pub(super) fn option(&mut self, token: &Token<'a>) -> bool {
        if token.kind != TokenKind::Word {
            return false;
        }
        if !token.first_char().is_some_and(is_option_start) {
            return false;
        }

        let root = self.ast.root();
        let id = self
            .ast
            .push(root, NodeKind::Option, token.text, token.source);
        if token.text.contains('=') {
            self.split_key_value(id, token, NodeKind::Identifier, NodeKind::Parameter);
        }
        true
    }

    /// Push key and value children of `parent`. The value starts one column
    /// after the key.
    fn split_key_value(
        &mut self,
        parent: NodeId,
        token: &Token<'a>,
        key_kind: NodeKind,
        value_kind: NodeKind,
    ) {
        let Some((key, value)) = token.text.split_once('=') else {
            return;
        };
        let value_source = token.source.offset(key.chars().count() + 1);
        self.ast.push(parent, key_kind, key, token.source);
        self.ast.push(parent, value_kind, value, value_source);
    }
}
