// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw-mode terminal input: key decoding, interruptible reads, questions
//! and line editing.
//!
//! Nothing here touches terminal modes. Callers put the terminal in raw
//! mode and hand the input stream to an [`InteractiveReader`].

mod decoder;
mod line;
mod prompt;
mod reader;

pub use decoder::{Decoded, Decoder, Key, KeyEvent, Modifiers};
pub use line::{LineEditor, CONTINUATION_PROMPT};
pub use prompt::{Confirm, TerminalPrompt};
pub use reader::{InteractiveReader, ReadError};
