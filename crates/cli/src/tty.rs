// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal mode and interrupt handling for stdin.

use std::io::{self, IsTerminal};
use std::os::fd::AsFd;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nix::sys::termios::{tcgetattr, tcsetattr, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Puts stdin in raw mode until dropped.
///
/// Raw here means byte-at-a-time input without echo or signal keys:
/// `ICANON`, `ECHO` and `ISIG` are cleared. Output processing is left on,
/// so `\n` still returns the carriage.
pub struct RawMode {
    original: Termios,
}

impl RawMode {
    pub fn enable() -> nix::Result<Self> {
        let stdin = io::stdin();
        let original = tcgetattr(stdin.as_fd())?;

        let mut raw = original.clone();
        raw.local_flags
            .remove(LocalFlags::ICANON | LocalFlags::ECHO | LocalFlags::ISIG);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        tcsetattr(stdin.as_fd(), SetArg::TCSANOW, &raw)?;

        tracing::debug!("terminal in raw mode");
        Ok(Self { original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let stdin = io::stdin();
        if let Err(e) = tcsetattr(stdin.as_fd(), SetArg::TCSANOW, &self.original) {
            tracing::warn!(error = %e, "failed to restore terminal mode");
        }
    }
}

/// Route SIGINT to `flag`. The handler only stores `true`.
pub fn register_interrupt(flag: Arc<AtomicBool>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
}
