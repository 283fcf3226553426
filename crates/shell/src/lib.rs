// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command-line front end: lexing, verification, parsing, typo correction
//! and diagnostics.
//!
//! This crate turns a raw command line into a checked [`ExecutionPlan`].
//! It does not spawn processes or touch terminal modes; the `cchell` binary
//! does that.
//!
//! # Quick Start
//!
//! ```
//! use std::path::PathBuf;
//! use cchell_shell::{
//!     resolve_commands, validate_tokens, ExecutableIndex, ExecutionPlan, Lexer, Parser,
//!     ReadError, Resolver,
//! };
//!
//! let index: ExecutableIndex = [("grep".to_string(), PathBuf::from("/bin/grep"))]
//!     .into_iter()
//!     .collect();
//! let resolver = Resolver::new(&index, "/");
//!
//! let tokens = Lexer::tokenize("LANG=C gerp -i needle")?;
//! validate_tokens(&tokens)?;
//! let mut ast = Parser::parse(&tokens);
//! let mut accept = |_: &str, _: &[char]| Ok::<char, ReadError>('y');
//! resolve_commands(&mut ast, &resolver, &mut accept)?;
//!
//! let plan = ExecutionPlan::from_ast(&ast, &index)?;
//! assert_eq!(plan.argv, ["grep", "-i", "needle"]);
//! # Ok::<(), cchell_shell::ParseError>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! text ──Lexer──▶ tokens ──validate_tokens──▶ tokens ──Parser──▶ Ast
//!      ──resolve_commands──▶ Ast ──ExecutionPlan::from_ast──▶ plan
//! ```
//!
//! Every stage fails with a [`ParseError`] holding one [`Diagnostic`],
//! which a [`Renderer`] turns into text.
//!
//! # AST Structure
//!
//! ```text
//! Statement
//! ├── Assignment "FOO=bar"
//! │   ├── Identifier "FOO"
//! │   └── Literal "bar"
//! ├── Command "ls"
//! └── Option "--color=auto"
//!     ├── Identifier "--color"
//!     └── Parameter "auto"
//! ```

pub mod diagnostic;
pub mod resolve;
pub mod span;
pub mod style;
pub mod terminal;
pub mod token;

mod ast;
mod lexer;
mod parse_error;
mod parser;
mod plan;
mod validator;

// AST types
pub use ast::{Ast, AstVisitor, Node, NodeId, NodeKind, NodeView};

// Diagnostics
pub use diagnostic::{Diagnostic, DiagnosticBuilder, Renderer, Severity, Theme};
pub use span::SourceLocation;

// Lexer
pub use lexer::{Lexer, LEXER_DOMAIN};
pub use token::{Token, TokenKind};

// Validator
pub use validator::validate_tokens;

// Parser
pub use parse_error::ParseError;
pub use parser::{resolve_commands, Parser, PARSER_DOMAIN};

// Resolution
pub use resolve::{ExecutableIndex, Resolver};

// Terminal
pub use terminal::{Confirm, ReadError};

// Handoff
pub use plan::ExecutionPlan;
