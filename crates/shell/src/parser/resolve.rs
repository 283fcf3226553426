// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command resolution: check the command word against `$PATH` or the
//! filesystem and offer corrections for typos.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::{Ast, NodeId};
use crate::diagnostic::Diagnostic;
use crate::parse_error::ParseError;
use crate::resolve::{is_executable, Resolver};
use crate::span::SourceLocation;
use crate::terminal::Confirm;
use crate::token::unescape;

/// Diagnostic domain for parsing and resolution.
pub const PARSER_DOMAIN: &str = "cchell::parser";

const ANSWERS: [char; 2] = ['y', 'n'];

/// Make sure the command of `ast` can be run, correcting typos with the
/// user's consent.
///
/// A command starting with `./` must name an executable file below the
/// resolver's base directory. Anything else must be an indexed executable.
/// When the name is not found but something close is, `confirm` is asked
/// whether to use it; answering `y` rewrites the command node. Every other
/// outcome, including a read failure, is a [`ParseError::Semantic`].
///
/// A statement without a command is left alone.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use cchell_shell::{resolve_commands, ExecutableIndex, Lexer, Parser, ReadError, Resolver};
///
/// let index: ExecutableIndex = [("ls".to_string(), PathBuf::from("/bin/ls"))]
///     .into_iter()
///     .collect();
/// let resolver = Resolver::new(&index, "/");
///
/// let tokens = Lexer::tokenize("sl -la").unwrap();
/// let mut ast = Parser::parse(&tokens);
/// let mut accept = |_: &str, _: &[char]| Ok::<char, ReadError>('y');
/// resolve_commands(&mut ast, &resolver, &mut accept).unwrap();
///
/// assert_eq!(ast.node(ast.command().unwrap()).text, "ls");
/// ```
pub fn resolve_commands(
    ast: &mut Ast<'_>,
    resolver: &Resolver<'_>,
    confirm: &mut dyn Confirm,
) -> Result<(), ParseError> {
    let Some(id) = ast.command() else {
        return Ok(());
    };
    let node = ast.node(id);
    let target = Target {
        id,
        typed: node.text.to_string(),
        source: node.source,
    };

    if target.typed.starts_with("./") {
        resolve_path(ast, resolver, confirm, &target)
    } else {
        resolve_name(ast, resolver, confirm, &target)
    }
}

/// The command node being resolved.
struct Target {
    id: NodeId,
    typed: String,
    source: SourceLocation,
}

impl Target {
    fn error(&self, message: String, annotation: String) -> ParseError {
        ParseError::Semantic(
            Diagnostic::error()
                .domain(PARSER_DOMAIN)
                .message(message)
                .annotation(annotation)
                .source(self.source)
                .length(self.typed.chars().count())
                .build(),
        )
    }
}

/// Ask `confirm`; only an explicit `y` counts as consent.
fn accepted(confirm: &mut dyn Confirm, question: &str) -> bool {
    match confirm.confirm(question, &ANSWERS) {
        Ok('y') => true,
        Ok(answer) => {
            tracing::debug!(%answer, "correction declined");
            false
        }
        Err(e) => {
            tracing::debug!(error = %e, "no answer to correction prompt");
            false
        }
    }
}

fn resolve_name(
    ast: &mut Ast<'_>,
    resolver: &Resolver<'_>,
    confirm: &mut dyn Confirm,
    target: &Target,
) -> Result<(), ParseError> {
    let name = unescape(&target.typed);
    if resolver.index().exists(&name) {
        tracing::debug!(command = %name, "command found in PATH");
        return Ok(());
    }

    let missing = || {
        target.error(
            format!("command '{}' doesn't exist", target.typed),
            "consider fixing $PATH or installing the program".to_string(),
        )
    };

    let Some(candidate) = resolver.suggest_command(&name) else {
        return Err(missing());
    };
    tracing::debug!(
        command = %name,
        candidate = candidate.name,
        distance = candidate.distance,
        "suggesting command"
    );

    let question = format!(
        "command '{}' doesn't exist, do you mean '{}'?",
        target.typed, candidate.name
    );
    if !accepted(confirm, &question) {
        return Err(missing());
    }
    ast.set_text(target.id, candidate.name);
    Ok(())
}

fn resolve_path(
    ast: &mut Ast<'_>,
    resolver: &Resolver<'_>,
    confirm: &mut dyn Confirm,
    target: &Target,
) -> Result<(), ParseError> {
    let relative = PathBuf::from(unescape(&target.typed[2..]).as_ref());
    let full = resolver.base().join(&relative);
    if fs::metadata(&full).is_ok() {
        return check_runnable(&full, target);
    }

    let missing = || {
        target.error(
            format!("executable path '{}' doesn't exist", target.typed),
            "consider fixing the typo or the directory tree".to_string(),
        )
    };

    let Some(found) = resolver.suggest_path(&relative) else {
        return Err(missing());
    };
    let suggestion = format!("./{}", found.display());
    tracing::debug!(path = %target.typed, %suggestion, "suggesting path");

    let question = format!(
        "executable path '{}' not found, do you mean '{}'?",
        target.typed, suggestion
    );
    if !accepted(confirm, &question) {
        return Err(missing());
    }
    check_runnable(&resolver.base().join(&found), target)?;
    ast.set_text(target.id, suggestion);
    Ok(())
}

/// An existing path must be an executable regular file.
fn check_runnable(path: &Path, target: &Target) -> Result<(), ParseError> {
    let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let shown = canonical.display();

    if !canonical.is_file() {
        return Err(target.error(
            format!("path '{shown}' is not a file"),
            "consider fixing the typo or the directory tree".to_string(),
        ));
    }
    if !is_executable(&canonical) {
        return Err(target.error(
            format!("path '{shown}' is not an executable"),
            format!("consider changing the permission on '{shown}'"),
        ));
    }
    Ok(())
}
