// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-line editor for raw-mode terminals.

use std::io::{self, Read, Write};

use super::decoder::{Decoded, Key, KeyEvent};
use super::reader::{InteractiveReader, ReadError};
use crate::style::Cursor;

const CTRL_D: u8 = 0x04;
const CTRL_L: u8 = 0x0c;

/// Prompt shown for lines continued with a trailing backslash.
pub const CONTINUATION_PROMPT: &str = "> ";

/// Reads one command line, redrawing it on every edit.
///
/// A line ending in an unescaped backslash is continued: the backslash and
/// newline are kept in the returned text and the editor starts a fresh row
/// under the continuation prompt.
pub struct LineEditor<W> {
    output: W,
    prompt: String,
    continuation: String,
}

/// Editing state for one call to [`LineEditor::read_line`].
#[derive(Default)]
struct LineState {
    committed: String,
    buffer: Vec<char>,
    cursor: usize,
    partial: Vec<u8>,
    continued: bool,
}

impl LineState {
    fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.buffer.is_empty()
    }

    /// Accumulate a byte of UTF-8 and insert the char once it's complete.
    fn push_byte(&mut self, byte: u8) {
        self.partial.push(byte);
        match std::str::from_utf8(&self.partial) {
            Ok(s) => {
                let chars: Vec<char> = s.chars().collect();
                self.partial.clear();
                for ch in chars {
                    self.insert(ch);
                }
            }
            Err(e) if e.error_len().is_none() => {}
            Err(_) => {
                tracing::trace!(bytes = ?self.partial, "discarding invalid utf-8");
                self.partial.clear();
            }
        }
    }

    fn apply(&mut self, key: Key) {
        match key {
            Key::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.buffer.remove(self.cursor);
            }
            Key::Delete if self.cursor < self.buffer.len() => {
                self.buffer.remove(self.cursor);
            }
            Key::ArrowLeft => self.cursor = self.cursor.saturating_sub(1),
            Key::ArrowRight => self.cursor = (self.cursor + 1).min(self.buffer.len()),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.buffer.len(),
            _ => {}
        }
    }

    /// Whether the current row ends in an odd run of backslashes.
    fn continues(&self) -> bool {
        self.buffer.iter().rev().take_while(|c| **c == '\\').count() % 2 == 1
    }
}

impl<W: Write> LineEditor<W> {
    pub fn new(output: W, prompt: impl Into<String>) -> Self {
        Self {
            output,
            prompt: prompt.into(),
            continuation: CONTINUATION_PROMPT.to_string(),
        }
    }

    pub fn with_continuation(mut self, prompt: impl Into<String>) -> Self {
        self.continuation = prompt.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    /// Read a line from `reader`.
    ///
    /// Returns [`ReadError::Eof`] on Ctrl-D with an empty line or at the end
    /// of input, and [`ReadError::Interrupted`] on Ctrl-C.
    pub fn read_line<R: Read>(
        &mut self,
        reader: &mut InteractiveReader<R>,
    ) -> Result<String, ReadError> {
        let mut state = LineState::default();
        reader.reset_decoder();
        self.redraw(&state)?;

        loop {
            let (byte, decoded) = reader.read_key()?;
            match decoded {
                Decoded::Pending => continue,
                Decoded::Event(KeyEvent { key, .. }) => {
                    if key == Key::Enter {
                        write!(self.output, "\r\n")?;
                        let continues = state.continues();
                        state.committed.extend(state.buffer.drain(..));
                        if !continues {
                            self.output.flush()?;
                            return Ok(state.committed);
                        }
                        state.committed.push('\n');
                        state.cursor = 0;
                        state.continued = true;
                    } else {
                        state.apply(key);
                    }
                }
                Decoded::Unrecognized => match byte {
                    CTRL_D if state.is_empty() => {
                        write!(self.output, "\r\n")?;
                        self.output.flush()?;
                        return Err(ReadError::Eof);
                    }
                    CTRL_L => {
                        write!(
                            self.output,
                            "{}{}",
                            Cursor::ClearScreen,
                            Cursor::MoveTo { row: 1, column: 1 }
                        )?;
                    }
                    b if b < 0x20 => continue,
                    b => state.push_byte(b),
                },
            }
            self.redraw(&state)?;
        }
    }

    fn redraw(&mut self, state: &LineState) -> io::Result<()> {
        let prompt = if state.continued {
            &self.continuation
        } else {
            &self.prompt
        };
        let text: String = state.buffer.iter().collect();
        write!(self.output, "\r{}{prompt}{text}", Cursor::ClearLine)?;
        let back = state.buffer.len() - state.cursor;
        if back > 0 {
            let back = u16::try_from(back).unwrap_or(u16::MAX);
            write!(self.output, "{}", Cursor::Left(back))?;
        }
        self.output.flush()
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
