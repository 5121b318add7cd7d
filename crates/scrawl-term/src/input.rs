// SPDX-License-Identifier: MIT
//
// Terminal key input — one byte, one event.
//
// The editor reads exactly one byte per keystroke. Multi-byte escape
// sequences (arrow keys, function keys, bracketed paste) are not decoded
// in this core: a lone ESC byte arrives as an ordinary character event
// like any other unrecognized byte. Decoding is total — every possible
// byte maps to some `Key`, so the state machine downstream never sees
// a failure from this layer.
//
// The byte-to-char mapping treats the byte as a Unicode scalar in the
// 0x00-0xFF range (Latin-1). With one byte per read there is no way to
// reassemble multi-byte UTF-8; this matches the one-byte input contract.

use std::io::{self, Read};

use bitflags::bitflags;

/// The interrupt byte (Ctrl-C). The run loop's termination signal.
const BYTE_INTERRUPT: u8 = 0x03;

/// Carriage return — what the Enter key sends in raw mode.
const BYTE_ENTER: u8 = 0x0D;

// ─── Key ────────────────────────────────────────────────────────────────────

/// A single decoded input unit.
///
/// `Interrupt` and `Enter` are the two recognized control inputs; every
/// other byte — printable or not — is delivered as [`Char`](Key::Char)
/// and the state machine decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Ctrl-C (`0x03`) — terminate the editor.
    Interrupt,
    /// Carriage return (`0x0D`) — the newline transition.
    Enter,
    /// Any other single byte, carried as a character.
    Char(char),
}

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// Only Ctrl is observable from a single raw byte (C0 control codes
    /// are the Ctrl-shifted letters). Shift is folded into the character
    /// itself; Alt would need the ESC-prefix convention, which the
    /// one-byte contract rules out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const CTRL = 0b0000_0001;
    }
}

impl Key {
    /// Modifier keys implied by this key's byte.
    ///
    /// A [`Char`](Key::Char) carrying a C0 control code reports
    /// [`Modifiers::CTRL`]; so do [`Interrupt`](Key::Interrupt) (Ctrl-C)
    /// and [`Enter`](Key::Enter) (Ctrl-M on the wire).
    #[must_use]
    pub fn modifiers(self) -> Modifiers {
        match self {
            Self::Interrupt | Self::Enter => Modifiers::CTRL,
            Self::Char(ch) => {
                if (ch as u32) < 0x20 || ch as u32 == 0x7F {
                    Modifiers::CTRL
                } else {
                    Modifiers::empty()
                }
            }
        }
    }

    /// The letter behind a Ctrl-chord, if this key is one.
    ///
    /// `Ctrl-A` through `Ctrl-Z` arrive as bytes `0x01..=0x1A`; this
    /// recovers the lowercase letter (`Interrupt` → `'c'`, `Enter` →
    /// `'m'`). Returns `None` for everything else.
    #[must_use]
    pub fn ctrl_letter(self) -> Option<char> {
        let code = match self {
            Self::Interrupt => u32::from(BYTE_INTERRUPT),
            Self::Enter => u32::from(BYTE_ENTER),
            Self::Char(ch) => ch as u32,
        };
        if (1..=26).contains(&code) {
            char::from_u32(code + 0x60)
        } else {
            None
        }
    }
}

// ─── Decoding ───────────────────────────────────────────────────────────────

/// Decode one raw byte into a [`Key`]. Total — every byte maps to a key.
#[inline]
#[must_use]
pub const fn decode(byte: u8) -> Key {
    match byte {
        BYTE_INTERRUPT => Key::Interrupt,
        BYTE_ENTER => Key::Enter,
        other => Key::Char(other as char),
    }
}

/// Blocking read of exactly one input unit.
///
/// In raw mode (`VMIN=1, VTIME=0`) the underlying `read` blocks until one
/// byte is available — this is the editor's only suspension point. One
/// attempt, no retries: any failure propagates so the caller's terminal
/// guard can run its teardown.
///
/// # Errors
///
/// Returns the underlying I/O error, or [`io::ErrorKind::UnexpectedEof`]
/// if the stream closed (a fatal condition for a raw-mode editor — there
/// is nothing left to read keystrokes from).
pub fn read_key(r: &mut impl Read) -> io::Result<Key> {
    let mut byte = [0u8; 1];
    match r.read(&mut byte)? {
        0 => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed while reading a key",
        )),
        _ => Ok(decode(byte[0])),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
