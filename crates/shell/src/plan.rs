// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution plan: what to launch once a command line has been resolved.

use std::path::PathBuf;

use serde::Serialize;

use crate::ast::{Ast, AstVisitor, Node, NodeId};
use crate::diagnostic::Diagnostic;
use crate::parse_error::ParseError;
use crate::parser::PARSER_DOMAIN;
use crate::resolve::ExecutableIndex;
use crate::span::SourceLocation;
use crate::token::unescape;

/// Program path, argument vector and extra environment for one command.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use cchell_shell::{ExecutableIndex, ExecutionPlan, Lexer, Parser};
///
/// let index: ExecutableIndex = [("ls".to_string(), PathBuf::from("/bin/ls"))]
///     .into_iter()
///     .collect();
/// let tokens = Lexer::tokenize(r"LC_ALL=C ls -la my\ dir").unwrap();
/// let plan = ExecutionPlan::from_ast(&Parser::parse(&tokens), &index).unwrap();
///
/// assert_eq!(plan.path, PathBuf::from("/bin/ls"));
/// assert_eq!(plan.argv, ["ls", "-la", "my dir"]);
/// assert_eq!(plan.envp, [("LC_ALL".to_string(), "C".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionPlan {
    pub path: PathBuf,
    pub argv: Vec<String>,
    pub envp: Vec<(String, String)>,
}

impl ExecutionPlan {
    /// Build the plan for a parsed (and normally resolved) statement.
    ///
    /// `./` commands run the path as written. Other commands must be in
    /// `index`.
    pub fn from_ast(ast: &Ast<'_>, index: &ExecutableIndex) -> Result<Self, ParseError> {
        let mut collector = PlanCollector::default();
        collector.visit(ast, ast.root());

        let Some((command, source)) = collector.command else {
            return Err(ParseError::Semantic(
                Diagnostic::error()
                    .domain(PARSER_DOMAIN)
                    .message("no command to execute")
                    .annotation("consider adding a command after the assignments")
                    .build(),
            ));
        };

        let name = unescape(&command).into_owned();
        let path = if command.starts_with("./") {
            PathBuf::from(&name)
        } else {
            match index.get(&name) {
                Some(path) => path.to_path_buf(),
                None => {
                    return Err(ParseError::Semantic(
                        Diagnostic::error()
                            .domain(PARSER_DOMAIN)
                            .message(format!("command '{command}' doesn't exist"))
                            .annotation("consider fixing $PATH or installing the program")
                            .source(source)
                            .length(command.chars().count())
                            .build(),
                    ));
                }
            }
        };

        let mut argv = Vec::with_capacity(collector.args.len() + 1);
        argv.push(name);
        argv.extend(collector.args);

        tracing::debug!(path = %path.display(), args = argv.len(), "execution plan ready");
        Ok(Self {
            path,
            argv,
            envp: collector.env,
        })
    }
}

#[derive(Default)]
struct PlanCollector {
    command: Option<(String, SourceLocation)>,
    args: Vec<String>,
    env: Vec<(String, String)>,
}

impl<'a> AstVisitor<'a> for PlanCollector {
    fn visit_command(&mut self, _ast: &Ast<'a>, _id: NodeId, node: &Node<'a>) {
        self.command = Some((node.text.to_string(), node.source));
    }

    fn visit_option(&mut self, _ast: &Ast<'a>, _id: NodeId, node: &Node<'a>) {
        self.args.push(unescape(&node.text).into_owned());
    }

    fn visit_assignment(&mut self, ast: &Ast<'a>, id: NodeId, _node: &Node<'a>) {
        if let Some((key, value)) = ast.key_value(id) {
            self.env.push((key.to_string(), unescape(value).into_owned()));
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
