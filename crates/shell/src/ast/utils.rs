// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying and displaying an [`Ast`].

use std::fmt::Write;

use serde::Serialize;

use super::{Ast, Node, NodeId, NodeKind};
use crate::span::SourceLocation;

impl<'a> Ast<'a> {
    /// The command node, if the statement has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cchell_shell::{Lexer, Parser};
    ///
    /// let tokens = Lexer::tokenize("FOO=bar ls -la").unwrap();
    /// let ast = Parser::parse(&tokens);
    /// let command = ast.command().unwrap();
    /// assert_eq!(ast.node(command).text, "ls");
    /// ```
    pub fn command(&self) -> Option<NodeId> {
        self.children(self.root())
            .find(|(_, node)| node.kind == NodeKind::Command)
            .map(|(id, _)| id)
    }

    /// Direct children of the root of the given kind.
    pub fn top_level(&self, kind: NodeKind) -> impl Iterator<Item = (NodeId, &Node<'a>)> {
        self.children(self.root())
            .filter(move |(_, node)| node.kind == kind)
    }

    /// Key and value text of an assignment or `key=value` option.
    pub fn key_value(&self, id: NodeId) -> Option<(&str, &str)> {
        match self.node(id).children() {
            [key, value] => Some((&*self.node(*key).text, &*self.node(*value).text)),
            _ => None,
        }
    }

    /// Number of nodes of the given kind anywhere in the tree.
    pub fn count(&self, kind: NodeKind) -> usize {
        self.iter().filter(|(_, node)| node.kind == kind).count()
    }

    /// Render the tree with box-drawing guides, one node per line.
    ///
    /// ```
    /// use cchell_shell::{Lexer, Parser};
    ///
    /// let tokens = Lexer::tokenize("FOO=bar ls -la").unwrap();
    /// let tree = Parser::parse(&tokens).render_tree();
    /// assert_eq!(
    ///     tree,
    ///     "statement\n\
    ///      ├── assignment \"FOO=bar\" 1:1\n\
    ///      │   ├── identifier \"FOO\" 1:1\n\
    ///      │   └── literal \"bar\" 1:5\n\
    ///      ├── command \"ls\" 1:9\n\
    ///      └── option \"-la\" 1:12\n"
    /// );
    /// ```
    pub fn render_tree(&self) -> String {
        let mut out = String::from("statement\n");
        self.render_children(self.root(), "", &mut out);
        out
    }

    fn render_children(&self, id: NodeId, prefix: &str, out: &mut String) {
        let children = self.node(id).children();
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            let node = self.node(child);
            let branch = if last { "└── " } else { "├── " };
            let _ = writeln!(
                out,
                "{prefix}{branch}{} {:?} {}",
                node.kind, node.text, node.source
            );
            let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
            self.render_children(child, &nested, out);
        }
    }

    /// A serializable nested view of the tree.
    pub fn view(&self) -> NodeView<'_> {
        self.view_of(self.root())
    }

    fn view_of(&self, id: NodeId) -> NodeView<'_> {
        let node = self.node(id);
        NodeView {
            kind: node.kind,
            text: &node.text,
            source: node.source,
            corrected: node.is_corrected(),
            children: node.children().iter().map(|c| self.view_of(*c)).collect(),
        }
    }
}

/// Nested, serializable form of an AST node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView<'n> {
    pub kind: NodeKind,
    pub text: &'n str,
    pub source: SourceLocation,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub corrected: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeView<'n>>,
}
