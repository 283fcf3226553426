// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstract syntax tree for one command line.
//!
//! The tree is an arena: nodes live in one vector and refer to each other
//! by [`NodeId`]. The root is always a `Statement` node.
//!
//! ```text
//! Statement
//! ├── Assignment "FOO=bar"
//! │   ├── Identifier "FOO"
//! │   └── Literal "bar"
//! ├── Command "ls"
//! └── Option "-la"
//! ```
//!
//! Node text borrows the command string. It only becomes owned when command
//! resolution rewrites a corrected command in place.

mod utils;
mod visitor;

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::span::SourceLocation;

pub use utils::NodeView;
pub use visitor::AstVisitor;

/// Index of a node in its [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The root.
    Statement,
    /// The program to run.
    Command,
    /// An argument after the command, including quoted strings.
    Option,
    /// Value half of an `--key=value` option.
    Parameter,
    /// A `NAME=value` environment assignment before the command.
    Assignment,
    /// Key half of an assignment or option.
    Identifier,
    /// Value half of an assignment.
    Literal,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Statement => "statement",
            NodeKind::Command => "command",
            NodeKind::Option => "option",
            NodeKind::Parameter => "parameter",
            NodeKind::Assignment => "assignment",
            NodeKind::Identifier => "identifier",
            NodeKind::Literal => "literal",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'a> {
    pub kind: NodeKind,
    pub text: Cow<'a, str>,
    pub source: SourceLocation,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl<'a> Node<'a> {
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether the text was rewritten after parsing.
    pub fn is_corrected(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }
}

/// Arena of nodes rooted at a `Statement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast<'a> {
    nodes: Vec<Node<'a>>,
}

impl Default for Ast<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Ast<'a> {
    /// A tree containing only the root statement.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Statement,
                text: Cow::Borrowed(""),
                source: SourceLocation::default(),
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is always present.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order, which is also source order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<'a>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Children of `id`, resolved to nodes.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node<'a>)> {
        self.node(id)
            .children
            .iter()
            .map(move |child| (*child, self.node(*child)))
    }

    /// Append a new node under `parent`.
    pub fn push(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        text: impl Into<Cow<'a, str>>,
        source: SourceLocation,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            text: text.into(),
            source,
            children: Vec::new(),
            parent: Some(parent),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Replace the text of `id` with an owned correction.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = Cow::Owned(text.into());
    }
}

#[cfg(test)]
#[path = "../ast_tests.rs"]
mod tests;
