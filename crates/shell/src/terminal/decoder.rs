// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-at-a-time decoder for keyboard escape sequences.

/// A decoded key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An Alt chord whose base key is not decoded.
    Unknown,
    Enter,
    Tab,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        alt: false,
        ctrl: false,
    };

    /// Decode an xterm modifier parameter. Codes 2 to 8 are one plus a
    /// bitmask of shift (1), alt (2) and ctrl (4); anything else means no
    /// modifiers.
    pub fn from_csi(code: u32) -> Modifiers {
        if !(2..=8).contains(&code) {
            return Modifiers::NONE;
        }
        let bits = code - 1;
        Modifiers {
            shift: bits & 1 != 0,
            alt: bits & 2 != 0,
            ctrl: bits & 4 != 0,
        }
    }
}

/// A key plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn with(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Outcome of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A complete key event.
    Event(KeyEvent),
    /// Part of a sequence; feed the next byte before acting. The byte must
    /// not be treated as text.
    Pending,
    /// Not a recognized key. In the ground state the caller treats the byte
    /// as literal input; bytes of an abandoned sequence are dropped.
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Ground,
    EscSeen,
    Csi {
        p1: u32,
        p2: u32,
        semicolon: bool,
    },
}

const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;

/// Keyboard escape-sequence decoder.
///
/// Each decoder owns its state, so independent readers never interfere.
///
/// ```
/// use cchell_shell::terminal::{Decoded, Decoder, Key, KeyEvent};
///
/// let mut decoder = Decoder::new();
/// assert_eq!(decoder.feed(0x1b), Decoded::Pending);
/// assert_eq!(decoder.feed(b'['), Decoded::Pending);
/// assert_eq!(decoder.feed(b'A'), Decoded::Event(KeyEvent::new(Key::ArrowUp)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: State,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a sequence is partially decoded.
    pub fn is_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Drop any partial sequence.
    pub fn reset(&mut self) {
        self.state = State::Ground;
    }

    pub fn feed(&mut self, byte: u8) -> Decoded {
        match self.state {
            State::Ground => self.ground(byte),
            State::EscSeen => {
                if byte == b'[' {
                    self.state = State::Csi {
                        p1: 0,
                        p2: 0,
                        semicolon: false,
                    };
                    return Decoded::Pending;
                }
                self.state = State::Ground;
                Decoded::Event(KeyEvent::with(
                    Key::Unknown,
                    Modifiers {
                        alt: true,
                        ..Modifiers::NONE
                    },
                ))
            }
            State::Csi { p1, p2, semicolon } => self.csi(byte, p1, p2, semicolon),
        }
    }

    fn ground(&mut self, byte: u8) -> Decoded {
        let key = match byte {
            ESC => {
                self.state = State::EscSeen;
                return Decoded::Pending;
            }
            b'\r' | b'\n' => Key::Enter,
            b'\t' => Key::Tab,
            DEL => Key::Backspace,
            _ => return Decoded::Unrecognized,
        };
        Decoded::Event(KeyEvent::new(key))
    }

    fn csi(&mut self, byte: u8, p1: u32, p2: u32, semicolon: bool) -> Decoded {
        if byte.is_ascii_digit() {
            let digit = u32::from(byte - b'0');
            let push = |p: u32| p.saturating_mul(10).saturating_add(digit);
            self.state = if semicolon {
                State::Csi {
                    p1,
                    p2: push(p2),
                    semicolon,
                }
            } else {
                State::Csi {
                    p1: push(p1),
                    p2,
                    semicolon,
                }
            };
            return Decoded::Pending;
        }
        if byte == b';' {
            self.state = State::Csi {
                p1,
                p2,
                semicolon: true,
            };
            return Decoded::Pending;
        }

        self.state = State::Ground;
        let modifiers = Modifiers::from_csi(if semicolon { p2 } else { 1 });
        match final_key(p1, byte) {
            Some(key) => Decoded::Event(KeyEvent::with(key, modifiers)),
            None => Decoded::Unrecognized,
        }
    }
}

fn final_key(p1: u32, byte: u8) -> Option<Key> {
    match byte {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        b'~' => match p1 {
            1 => Some(Key::Home),
            2 => Some(Key::Insert),
            3 => Some(Key::Delete),
            4 => Some(Key::End),
            5 => Some(Key::PageUp),
            6 => Some(Key::PageDown),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
