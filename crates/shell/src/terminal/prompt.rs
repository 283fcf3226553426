// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Yes/no style questions answered with a single key.

use std::io::{self, Read, Write};

use super::decoder::{Decoded, Key, KeyEvent};
use super::reader::{InteractiveReader, ReadError};
use crate::style::Color;

/// EOT, sent by Ctrl-D.
const CTRL_D: u8 = 0x04;

/// Something that can ask the user to pick one of a few single-character
/// answers.
///
/// The first option is the default. Closures with the matching signature
/// implement this trait, which is how tests and non-interactive callers
/// answer.
pub trait Confirm {
    fn confirm(&mut self, message: &str, options: &[char]) -> Result<char, ReadError>;
}

impl<F> Confirm for F
where
    F: FnMut(&str, &[char]) -> Result<char, ReadError>,
{
    fn confirm(&mut self, message: &str, options: &[char]) -> Result<char, ReadError> {
        self(message, options)
    }
}

/// Asks questions on a terminal.
///
/// Writes `ask: {message} [Y/n] ` and waits for Enter (the first option) or
/// a byte from the option set. Anything else, including complete escape
/// sequences, is ignored.
///
/// ```
/// use std::io::Cursor;
/// use cchell_shell::terminal::{Confirm, InteractiveReader, TerminalPrompt};
///
/// let reader = InteractiveReader::new(Cursor::new(b"xn".to_vec()));
/// let mut prompt = TerminalPrompt::new(reader, Vec::new());
/// assert_eq!(prompt.confirm("continue?", &['y', 'n']).unwrap(), 'n');
///
/// let (_, output) = prompt.into_parts();
/// assert_eq!(String::from_utf8(output).unwrap(), "ask: continue? [Y/n] n\n");
/// ```
pub struct TerminalPrompt<R, W> {
    reader: InteractiveReader<R>,
    output: W,
    echo: bool,
    tag_color: Option<Color>,
}

impl<R: Read, W: Write> TerminalPrompt<R, W> {
    pub fn new(reader: InteractiveReader<R>, output: W) -> Self {
        Self {
            reader,
            output,
            echo: true,
            tag_color: None,
        }
    }

    /// Whether the chosen answer is echoed after the question.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Color the `ask` tag. `None` writes it plain.
    pub fn with_tag_color(mut self, color: Option<Color>) -> Self {
        self.tag_color = color;
        self
    }

    pub fn reader_mut(&mut self) -> &mut InteractiveReader<R> {
        &mut self.reader
    }

    pub fn into_parts(self) -> (InteractiveReader<R>, W) {
        (self.reader, self.output)
    }

    fn ask(&mut self, message: &str, options: &[char]) -> io::Result<()> {
        let tag = match self.tag_color {
            Some(color) => color.paint("ask"),
            None => "ask".to_string(),
        };
        let choices: Vec<String> = options
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    c.to_ascii_uppercase().to_string()
                } else {
                    c.to_string()
                }
            })
            .collect();
        write!(self.output, "{tag}: {message} [{}] ", choices.join("/"))?;
        self.output.flush()
    }

    fn answer(&mut self, choice: char) -> Result<char, ReadError> {
        if self.echo {
            writeln!(self.output, "{choice}")?;
            self.output.flush()?;
        }
        Ok(choice)
    }
}

impl<R: Read, W: Write> Confirm for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str, options: &[char]) -> Result<char, ReadError> {
        let Some(&default) = options.first() else {
            return Err(ReadError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "question has no options",
            )));
        };
        self.ask(message, options)?;
        self.reader.reset_decoder();

        loop {
            let (byte, decoded) = self.reader.read_key()?;
            match decoded {
                Decoded::Event(KeyEvent {
                    key: Key::Enter, ..
                }) => return self.answer(default),
                Decoded::Event(_) | Decoded::Pending => continue,
                Decoded::Unrecognized => {}
            }
            if byte == CTRL_D {
                return Err(ReadError::Eof);
            }
            let ch = char::from(byte);
            if byte.is_ascii() && options.contains(&ch) {
                return self.answer(ch);
            }
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
