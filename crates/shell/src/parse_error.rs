// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single error type shared by the lexer, validator, parser and
//! command resolution.

use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// A failure anywhere between raw text and an execution plan.
///
/// Every variant carries exactly one [`Diagnostic`]; the variant records
/// which stage produced it.
///
/// # Examples
///
/// ```
/// use cchell_shell::{validate_tokens, Lexer, ParseError};
///
/// let tokens = Lexer::tokenize("foo)").unwrap();
/// let err = validate_tokens(&tokens).unwrap_err();
/// assert!(matches!(err, ParseError::Syntax(_)));
/// assert_eq!(err.diagnostic().location().to_string(), "1:4");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed text, such as an unterminated quote.
    #[error(transparent)]
    Lex(Diagnostic),

    /// A well-lexed token stream with bad structure, such as unbalanced
    /// brackets.
    #[error(transparent)]
    Syntax(Diagnostic),

    /// A structurally valid command that cannot run: unknown commands,
    /// declined corrections, missing paths.
    #[error(transparent)]
    Semantic(Diagnostic),
}

impl ParseError {
    /// The diagnostic describing this error.
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            ParseError::Lex(d) | ParseError::Syntax(d) | ParseError::Semantic(d) => d,
        }
    }

    /// Consume the error, keeping only its diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            ParseError::Lex(d) | ParseError::Syntax(d) | ParseError::Semantic(d) => d,
        }
    }

    /// Short name of the failing stage.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Lex(_) => "lex",
            ParseError::Syntax(_) => "syntax",
            ParseError::Semantic(_) => "semantic",
        }
    }
}
