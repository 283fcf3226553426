// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod classify;
mod resolve;

use crate::ast::{Ast, NodeKind};
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Lex and parse `src`. Panics if lexing fails.
fn parse(src: &str) -> Ast<'_> {
    let tokens = Lexer::tokenize(src).unwrap();
    Parser::parse(&tokens)
}

/// Kinds of the root's children, in order.
fn kinds(ast: &Ast<'_>) -> Vec<NodeKind> {
    ast.children(ast.root()).map(|(_, node)| node.kind).collect()
}

/// Texts of the root's children, in order.
fn texts<'s>(ast: &'s Ast<'_>) -> Vec<&'s str> {
    ast.children(ast.root()).map(|(_, node)| &*node.text).collect()
}
