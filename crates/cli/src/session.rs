// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One command line from text to a launched process.

use std::ffi::OsStr;
use std::io::{self, BufRead, Stdin};

use anyhow::Context;
use cchell_shell::style::Color;
use cchell_shell::terminal::{InteractiveReader, LineEditor, TerminalPrompt};
use cchell_shell::{
    resolve_commands, validate_tokens, Confirm, ExecutableIndex, ExecutionPlan, Lexer,
    ParseError, Parser, ReadError, Renderer, Resolver,
};

use crate::exec;
use crate::exit_error::ExitError;
use crate::output::{format_ast, format_error_json, format_plan, format_tokens, Dump, OutputFormat};
use crate::tty::{self, RawMode};

/// Prompt shown for interactive entry.
const LINE_PROMPT: &str = "$ ";

/// Exit status when interactive entry is interrupted.
const INTERRUPTED_EXIT: i32 = 130;

/// Settings for one run, resolved from flags and config.
pub struct Session {
    pub format: OutputFormat,
    pub dump: Option<Dump>,
    pub auto_accept: bool,
    pub renderer: Renderer,
    pub echo: bool,
    pub tag_color: Option<Color>,
}

/// Answers every question with its default.
pub struct AutoAccept;

impl Confirm for AutoAccept {
    fn confirm(&mut self, message: &str, options: &[char]) -> Result<char, ReadError> {
        let answer = options.first().copied().ok_or_else(|| {
            ReadError::Io(io::Error::new(io::ErrorKind::InvalidInput, "no options"))
        })?;
        tracing::info!(question = message, %answer, "auto-accepted");
        Ok(answer)
    }
}

/// Where the command line came from, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Argv,
    Stdin,
}

impl Origin {
    fn label(self) -> &'static str {
        match self {
            Origin::Argv => "argv",
            Origin::Stdin => "stdin",
        }
    }
}

impl Session {
    /// Check `command` (or a line read from stdin when empty) and run it.
    pub fn run(&self, command: &[String]) -> anyhow::Result<()> {
        let mut reader = InteractiveReader::new(io::stdin());
        let interactive = tty::stdin_is_tty();
        let mut raw = None;
        if interactive && (command.is_empty() || !self.auto_accept) {
            tty::register_interrupt(reader.interrupt_flag())
                .context("failed to install interrupt handler")?;
            raw = Some(RawMode::enable().context("failed to put the terminal in raw mode")?);
        }

        let (text, origin) = if !command.is_empty() {
            (command.join(" "), Origin::Argv)
        } else if interactive {
            match LineEditor::new(io::stderr(), LINE_PROMPT).read_line(&mut reader) {
                Ok(line) => (line, Origin::Stdin),
                Err(ReadError::Eof) => return Ok(()),
                Err(ReadError::Interrupted) => {
                    return Err(ExitError::silent(INTERRUPTED_EXIT).into())
                }
                Err(e) => return Err(e).context("failed to read command line"),
            }
        } else {
            (read_piped_line(io::stdin().lock())?, Origin::Stdin)
        };
        tracing::debug!(%text, origin = origin.label(), "command line");

        let Some(plan) = self.plan(&text, origin, reader)? else {
            return Ok(());
        };

        drop(raw.take());
        let code = exec::launch(&plan)
            .with_context(|| format!("failed to launch '{}'", plan.path.display()))?;
        if code != 0 {
            return Err(ExitError::silent(code).into());
        }
        Ok(())
    }

    /// Run the front end, printing the requested dump. `None` means there
    /// is nothing to launch.
    fn plan(
        &self,
        text: &str,
        origin: Origin,
        reader: InteractiveReader<Stdin>,
    ) -> anyhow::Result<Option<ExecutionPlan>> {
        if self.dump == Some(Dump::Tokens) {
            print!("{}", format_tokens(&Lexer::tokenize_lossy(text), self.format)?);
            return Ok(None);
        }

        let tokens = Lexer::tokenize(text).map_err(|e| self.fail(&e, text, origin))?;
        validate_tokens(&tokens).map_err(|e| self.fail(&e, text, origin))?;
        let mut ast = Parser::parse(&tokens);
        if self.dump == Some(Dump::Ast) {
            print!("{}", format_ast(&ast, self.format)?);
            return Ok(None);
        }

        let index = build_index(crate::env::path_var().as_deref());
        let base = std::env::current_dir().context("failed to read the current directory")?;
        let resolver = Resolver::new(&index, base);

        let resolved = if self.auto_accept {
            resolve_commands(&mut ast, &resolver, &mut AutoAccept)
        } else {
            let mut prompt = TerminalPrompt::new(reader, io::stderr())
                .with_echo(self.echo)
                .with_tag_color(self.tag_color);
            resolve_commands(&mut ast, &resolver, &mut prompt)
        };
        resolved.map_err(|e| self.fail(&e, text, origin))?;

        let plan = ExecutionPlan::from_ast(&ast, &index).map_err(|e| self.fail(&e, text, origin))?;
        if self.dump == Some(Dump::Plan) {
            print!("{}", format_plan(&plan, self.format)?);
            return Ok(None);
        }
        Ok(Some(plan))
    }

    /// Report `err` on stderr and turn it into a silent exit.
    fn fail(&self, err: &ParseError, text: &str, origin: Origin) -> anyhow::Error {
        let report = match self.format {
            OutputFormat::Text => self.renderer.render(err.diagnostic(), text, origin.label()),
            OutputFormat::Json => match format_error_json(err) {
                Ok(json) => json,
                Err(e) => return e,
            },
        };
        eprint!("{report}");
        ExitError::silent(1).into()
    }
}

/// Index the executables of `path`. An unset `PATH` gives an empty index.
fn build_index(path: Option<&OsStr>) -> ExecutableIndex {
    match path {
        Some(path) => ExecutableIndex::from_path_var(path),
        None => {
            tracing::warn!("PATH is not set, no executables indexed");
            ExecutableIndex::default()
        }
    }
}

/// First line of piped input, without its line ending. The rest of the
/// input is left for correction answers.
fn read_piped_line(mut input: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read command line from stdin")?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
