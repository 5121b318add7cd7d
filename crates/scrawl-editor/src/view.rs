//! View — deterministic rendering of a [`State`] to a terminal.
//!
//! One strategy: full-screen redraw after every keystroke. Clear, home the
//! cursor, write each buffer line followed by a cursor-down advance, flush.
//! No damage tracking, no diffing — the buffers this editor holds are a
//! handful of lines, and a frame that small costs less than the machinery
//! to avoid it.
//!
//! Rendering targets any `impl Write`, so tests assert the exact byte
//! stream against a `Vec<u8>` and the binary hands in a locked stdout.

use std::io::{self, Write};

use scrawl_term::ansi;

use crate::cursor::Cursor;
use crate::state::State;

/// Screen coordinate for a buffer coordinate, saturating far off-screen
/// positions instead of wrapping.
fn screen_coord(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Draw the full frame for a state.
///
/// Emits, in order: clear screen, cursor to origin, then for each buffer
/// line the line's bytes, a one-line cursor-down, and a carriage return.
/// The carriage return matters: raw mode turns off output post-processing,
/// so without it each line would start where the previous one ended and
/// the frame would staircase across the screen.
///
/// The hardware cursor is left wherever the last line ended — call
/// [`place_cursor`] afterwards to park it on the editing position.
///
/// # Errors
///
/// Propagates any write or flush error from the underlying writer.
pub fn render(w: &mut impl Write, state: &State) -> io::Result<()> {
    ansi::clear_screen(w)?;
    ansi::cursor_to(w, 0, 0)?;
    for line in state.buffer.lines() {
        w.write_all(line.as_bytes())?;
        ansi::cursor_down(w, 1)?;
        w.write_all(b"\r")?;
    }
    w.flush()
}

/// Park the hardware cursor on the state's editing position and show it.
///
/// # Errors
///
/// Propagates any write or flush error from the underlying writer.
pub fn place_cursor(w: &mut impl Write, cursor: Cursor) -> io::Result<()> {
    ansi::cursor_to(w, screen_coord(cursor.col), screen_coord(cursor.row))?;
    ansi::cursor_show(w)?;
    w.flush()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
