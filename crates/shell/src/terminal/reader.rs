// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interruptible byte reader for raw-mode input.

use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use super::decoder::{Decoded, Decoder};

/// ETX, sent by Ctrl-C when the terminal does not turn it into a signal.
const CTRL_C: u8 = 0x03;

/// Failure to read interactive input.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("interrupted")]
    Interrupted,

    #[error("end of input")]
    Eof,
}

impl ReadError {
    /// OS error code of an I/O failure.
    pub fn code(&self) -> Option<i32> {
        match self {
            ReadError::Io(e) => e.raw_os_error(),
            _ => None,
        }
    }
}

/// Reads raw input one byte at a time, watching an interrupt flag.
///
/// The flag is an `Arc<AtomicBool>` owned by the reader. A signal handler
/// only needs to store `true` into it (see [`Self::interrupt_flag`]); the
/// reader checks it before every read and after a read interrupted by a
/// signal, and reports [`ReadError::Interrupted`]. A Ctrl-C byte is
/// reported the same way.
///
/// Each reader owns a [`Decoder`], so escape sequences are decoded per
/// reader.
#[derive(Debug)]
pub struct InteractiveReader<R> {
    input: R,
    interrupted: Arc<AtomicBool>,
    decoder: Decoder,
}

impl<R: Read> InteractiveReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            interrupted: Arc::new(AtomicBool::new(false)),
            decoder: Decoder::new(),
        }
    }

    /// A handle to the interrupt flag, for registering with a signal
    /// handler.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// Read one byte.
    ///
    /// An observed interrupt is consumed: the next call reads normally.
    pub fn read_byte(&mut self) -> Result<u8, ReadError> {
        let mut buf = [0u8; 1];
        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.decoder.reset();
                return Err(ReadError::Interrupted);
            }
            match self.input.read(&mut buf) {
                Ok(0) => return Err(ReadError::Eof),
                Ok(_) if buf[0] == CTRL_C => {
                    self.decoder.reset();
                    return Err(ReadError::Interrupted);
                }
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ReadError::Io(e)),
            }
        }
    }

    /// Read one byte and run it through the decoder.
    pub fn read_key(&mut self) -> Result<(u8, Decoded), ReadError> {
        let byte = self.read_byte()?;
        Ok((byte, self.decoder.feed(byte)))
    }

    /// Forget any partially decoded sequence.
    pub fn reset_decoder(&mut self) {
        self.decoder.reset();
    }

    pub fn into_inner(self) -> R {
        self.input
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
