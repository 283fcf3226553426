// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing the AST.

use super::{Ast, Node, NodeId, NodeKind};

/// Visitor trait for traversing an [`Ast`].
///
/// Default implementations walk the whole tree in source order. Override
/// the `visit_*` method for the node kinds you care about; call
/// [`AstVisitor::walk`] from an override to keep descending, or skip it to
/// stop at that node.
///
/// # Example: Collect Assignment Names
///
/// ```
/// use cchell_shell::{Ast, AstVisitor, Lexer, Node, NodeId, NodeKind, Parser};
///
/// struct Names(Vec<String>);
///
/// impl<'a> AstVisitor<'a> for Names {
///     fn visit_identifier(&mut self, _ast: &Ast<'a>, _id: NodeId, node: &Node<'a>) {
///         self.0.push(node.text.to_string());
///     }
/// }
///
/// let tokens = Lexer::tokenize("A=1 B=2 env --x=3").unwrap();
/// let ast = Parser::parse(&tokens);
/// let mut names = Names(Vec::new());
/// names.visit(&ast, ast.root());
/// assert_eq!(names.0, ["A", "B", "--x"]);
/// ```
pub trait AstVisitor<'a> {
    /// Dispatch on the kind of `id`.
    fn visit(&mut self, ast: &Ast<'a>, id: NodeId) {
        let node = ast.node(id);
        match node.kind {
            NodeKind::Statement => self.visit_statement(ast, id, node),
            NodeKind::Command => self.visit_command(ast, id, node),
            NodeKind::Option => self.visit_option(ast, id, node),
            NodeKind::Parameter => self.visit_parameter(ast, id, node),
            NodeKind::Assignment => self.visit_assignment(ast, id, node),
            NodeKind::Identifier => self.visit_identifier(ast, id, node),
            NodeKind::Literal => self.visit_literal(ast, id, node),
        }
    }

    fn visit_statement(&mut self, ast: &Ast<'a>, id: NodeId, _node: &Node<'a>) {
        self.walk(ast, id);
    }

    fn visit_command(&mut self, ast: &Ast<'a>, id: NodeId, _node: &Node<'a>) {
        self.walk(ast, id);
    }

    fn visit_option(&mut self, ast: &Ast<'a>, id: NodeId, _node: &Node<'a>) {
        self.walk(ast, id);
    }

    fn visit_assignment(&mut self, ast: &Ast<'a>, id: NodeId, _node: &Node<'a>) {
        self.walk(ast, id);
    }

    fn visit_parameter(&mut self, _ast: &Ast<'a>, _id: NodeId, _node: &Node<'a>) {}

    fn visit_identifier(&mut self, _ast: &Ast<'a>, _id: NodeId, _node: &Node<'a>) {}

    fn visit_literal(&mut self, _ast: &Ast<'a>, _id: NodeId, _node: &Node<'a>) {}

    /// Visit every child of `id` in order.
    fn walk(&mut self, ast: &Ast<'a>, id: NodeId) {
        for &child in ast.node(id).children() {
            self.visit(ast, child);
        }
    }
}
