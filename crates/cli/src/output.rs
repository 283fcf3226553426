// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON output for `--dump` and for errors in JSON mode.

use std::fmt::Write;

use cchell_shell::{Ast, ExecutionPlan, ParseError, Token};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pipeline stage to print instead of running the command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Dump {
    Tokens,
    Ast,
    Plan,
}

pub fn format_tokens(tokens: &[Token<'_>], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens.iter().map(|t| format!("{t}\n")).collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)? + "\n"),
    }
}

pub fn format_ast(ast: &Ast<'_>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(ast.render_tree()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ast.view())? + "\n"),
    }
}

pub fn format_plan(plan: &ExecutionPlan, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "path: {}", plan.path.display())?;
            writeln!(out, "argv: {:?}", plan.argv)?;
            for (key, value) in &plan.envp {
                writeln!(out, "env:  {key}={value}")?;
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)? + "\n"),
    }
}

/// A parse error as a JSON object: `{"kind": ..., "diagnostic": {...}}`.
pub fn format_error_json(err: &ParseError) -> anyhow::Result<String> {
    let obj = serde_json::json!({
        "kind": err.kind(),
        "diagnostic": err.diagnostic(),
    });
    Ok(serde_json::to_string_pretty(&obj)? + "\n")
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
