//! Editor state and the keystroke transition function.
//!
//! `State` is the single unit of editor state: one buffer, one cursor.
//! It is created once as [`State::blank`] at program start and then
//! replaced — never mutated — by [`transition`] on every keystroke.
//!
//! # The transition contract
//!
//! `transition` is pure and total: no I/O, no hidden mutation, no failure
//! modes. Every key either advances the state or leaves it unchanged.
//! [`Key::Interrupt`] is deliberately *not* a state transition — it is the
//! run loop's termination signal, consumed before the state machine is
//! consulted. If it arrives here anyway it is a no-op.
//!
//! # Two rule sets
//!
//! The editor this core descends from had two well-known quirks: printable
//! characters always landed on line 0 with the cursor left behind, and the
//! Enter key appended a fixed placeholder line. [`Semantics`] keeps both
//! worlds available:
//!
//! - [`Semantics::Legacy`] reproduces the quirks bit for bit, for parity
//!   testing against the historical behavior.
//! - [`Semantics::CursorAware`] is the editor as intended: insert at the
//!   cursor, split lines on Enter, clamp the cursor to the buffer after
//!   every step.
//!
//! The deployed binary runs `CursorAware`; `Legacy` is exercised by tests.

use scrawl_term::input::Key;

use crate::buffer::Buffer;
use crate::cursor::Cursor;

/// The line appended by the Enter key under [`Semantics::Legacy`].
const PLACEHOLDER_LINE: &str = "loooootsa letters";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The editor's complete state: buffer plus cursor.
///
/// A plain value — clone it, compare it, replace it. There is exactly one
/// live `State` per editor, threaded through the read-eval-render loop.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct State {
    pub buffer: Buffer,
    pub cursor: Cursor,
}

impl State {
    /// The starting state: one empty line, cursor at the origin.
    ///
    /// Value-equal across calls — `blank()` has no hidden inputs.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            buffer: Buffer::blank(),
            cursor: Cursor::blank(),
        }
    }

    /// Build a state from buffer lines and a cursor position.
    #[must_use]
    pub fn new(buffer: Buffer, cursor: Cursor) -> Self {
        Self { buffer, cursor }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Semantics
// ---------------------------------------------------------------------------

/// Which editing rule set [`transition`] applies.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Semantics {
    /// The historical behavior, preserved exactly:
    ///
    /// - a character event rebuilds the buffer as line 0 with the
    ///   character appended (other lines are dropped — that is what the
    ///   original did, quirk and all);
    /// - Enter appends the literal [`PLACEHOLDER_LINE`];
    /// - the cursor never moves and is never clamped;
    /// - every non-interrupt, non-Enter byte counts as a character.
    Legacy,
    /// Cursor-aware editing:
    ///
    /// - a printable character inserts at `(cursor.row, cursor.col)` and
    ///   advances the column by one grapheme;
    /// - Enter splits the current line at the cursor and moves the cursor
    ///   to the start of the new line;
    /// - unprintable bytes (control characters other than Enter) are
    ///   unmapped and leave the state untouched;
    /// - the cursor is clamped to the buffer's extents on every
    ///   transition.
    #[default]
    CursorAware,
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// Compute the next state for one key event. Pure and total.
#[must_use]
pub fn transition(state: &State, key: Key, semantics: Semantics) -> State {
    match semantics {
        Semantics::Legacy => legacy(state, key),
        Semantics::CursorAware => cursor_aware(state, key),
    }
}

/// The historical rules. See [`Semantics::Legacy`].
fn legacy(state: &State, key: Key) -> State {
    match key {
        Key::Interrupt => state.clone(),
        Key::Enter => State {
            buffer: state.buffer.push_line(PLACEHOLDER_LINE),
            cursor: state.cursor,
        },
        Key::Char(ch) => {
            // Line 0 plus the new character is the whole next buffer.
            let line = state.buffer.line(0).unwrap_or_default();
            let mut line = line.to_owned();
            line.push(ch);
            State {
                buffer: Buffer::from_lines([line]),
                cursor: state.cursor,
            }
        }
    }
}

/// The cursor-aware rules. See [`Semantics::CursorAware`].
fn cursor_aware(state: &State, key: Key) -> State {
    // An unclamped cursor (hand-built state, or a shrunken buffer) is
    // pulled into bounds before the edit, so the row/col the edit targets
    // is the row/col the user sees.
    let cursor = state.cursor.clamped(&state.buffer);

    match key {
        Key::Interrupt => State {
            buffer: state.buffer.clone(),
            cursor,
        },
        Key::Enter => State {
            buffer: state.buffer.split_line(cursor.row, cursor.col),
            cursor: Cursor::new(cursor.row + 1, 0),
        },
        Key::Char(ch) if !ch.is_control() => State {
            buffer: state.buffer.insert_char(cursor.row, cursor.col, ch),
            cursor: cursor.right(),
        },
        // Unmapped: control bytes we don't bind (ESC, Tab, Backspace, ...).
        Key::Char(_) => State {
            buffer: state.buffer.clone(),
            cursor,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scrawl_term::input::decode;

    fn lines_of(state: &State) -> Vec<&str> {
        state.buffer.lines().collect()
    }

    // -- blank --------------------------------------------------------------

    #[test]
    fn blank_is_one_empty_line_at_origin() {
        let s = State::blank();
        assert_eq!(lines_of(&s), [""]);
        assert_eq!(s.cursor, Cursor::ORIGIN);
    }

    #[test]
    fn blank_is_idempotent() {
        assert_eq!(State::blank(), State::blank());
    }

    // -- Legacy: the historical behavior, bit for bit -----------------------

    #[test]
    fn legacy_char_from_blank() {
        let s = transition(&State::blank(), Key::Char('a'), Semantics::Legacy);
        assert_eq!(lines_of(&s), ["a"]);
        // The cursor does not advance under the legacy rules.
        assert_eq!(s.cursor, Cursor::ORIGIN);
    }

    #[test]
    fn legacy_newline_appends_placeholder() {
        let start = State::new(Buffer::from_lines(["a"]), Cursor::ORIGIN);
        let s = transition(&start, Key::Enter, Semantics::Legacy);
        assert_eq!(lines_of(&s), ["a", "loooootsa letters"]);
        assert_eq!(s.cursor, Cursor::ORIGIN);
    }

    #[test]
    fn legacy_char_targets_only_line_zero() {
        // The original rebuilt the buffer from line 0 alone, so a
        // character after a newline collapses the buffer back to one line.
        let start = State::new(Buffer::from_lines(["ab", "cd"]), Cursor::new(1, 1));
        let s = transition(&start, Key::Char('x'), Semantics::Legacy);
        assert_eq!(lines_of(&s), ["abx"]);
    }

    #[test]
    fn legacy_every_other_byte_is_a_character() {
        // Control bytes other than interrupt/return route to the
        // character transition, per the historical dispatch.
        for byte in [0x00u8, 0x09, 0x1B, 0x7F] {
            let s = transition(&State::blank(), decode(byte), Semantics::Legacy);
            assert_eq!(s.buffer.grapheme_len(0), 1, "byte {byte:#04x}");
        }
    }

    #[test]
    fn legacy_interrupt_is_not_a_transition() {
        let start = State::new(Buffer::from_lines(["ab"]), Cursor::new(0, 1));
        let s = transition(&start, Key::Interrupt, Semantics::Legacy);
        assert_eq!(s, start);
    }

    // -- CursorAware: insertion ---------------------------------------------

    #[test]
    fn char_inserts_at_cursor_and_advances() {
        let s = transition(&State::blank(), Key::Char('a'), Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["a"]);
        assert_eq!(s.cursor, Cursor::new(0, 1));
    }

    #[test]
    fn typing_builds_a_word() {
        let mut s = State::blank();
        for ch in "hello".chars() {
            s = transition(&s, Key::Char(ch), Semantics::CursorAware);
        }
        assert_eq!(lines_of(&s), ["hello"]);
        assert_eq!(s.cursor, Cursor::new(0, 5));
    }

    #[test]
    fn char_inserts_mid_line() {
        let start = State::new(Buffer::from_lines(["ac"]), Cursor::new(0, 1));
        let s = transition(&start, Key::Char('b'), Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["abc"]);
        assert_eq!(s.cursor, Cursor::new(0, 2));
    }

    #[test]
    fn char_inserts_on_cursor_row_not_line_zero() {
        let start = State::new(Buffer::from_lines(["one", "two"]), Cursor::new(1, 3));
        let s = transition(&start, Key::Char('!'), Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["one", "two!"]);
        assert_eq!(s.cursor, Cursor::new(1, 4));
    }

    // -- CursorAware: newline -----------------------------------------------

    #[test]
    fn enter_splits_line_at_cursor() {
        let start = State::new(Buffer::from_lines(["hello world"]), Cursor::new(0, 5));
        let s = transition(&start, Key::Enter, Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["hello", " world"]);
        assert_eq!(s.cursor, Cursor::new(1, 0));
    }

    #[test]
    fn enter_at_line_end_opens_empty_line() {
        let start = State::new(Buffer::from_lines(["abc"]), Cursor::new(0, 3));
        let s = transition(&start, Key::Enter, Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["abc", ""]);
        assert_eq!(s.cursor, Cursor::new(1, 0));
    }

    #[test]
    fn enter_on_blank_state() {
        let s = transition(&State::blank(), Key::Enter, Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["", ""]);
        assert_eq!(s.cursor, Cursor::new(1, 0));
    }

    #[test]
    fn enter_then_typing_lands_on_the_new_line() {
        let start = State::new(Buffer::from_lines(["ab"]), Cursor::new(0, 1));
        let s = transition(&start, Key::Enter, Semantics::CursorAware);
        let s = transition(&s, Key::Char('x'), Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["a", "xb"]);
        assert_eq!(s.cursor, Cursor::new(1, 1));
    }

    // -- CursorAware: unmapped & clamping -----------------------------------

    #[test]
    fn unmapped_control_bytes_are_noops() {
        let start = State::new(Buffer::from_lines(["ab"]), Cursor::new(0, 1));
        for byte in [0x00u8, 0x09, 0x1B, 0x7F] {
            let s = transition(&start, decode(byte), Semantics::CursorAware);
            assert_eq!(s, start, "byte {byte:#04x}");
        }
    }

    #[test]
    fn interrupt_leaves_state_unchanged() {
        let start = State::new(Buffer::from_lines(["ab"]), Cursor::new(0, 1));
        let s = transition(&start, Key::Interrupt, Semantics::CursorAware);
        assert_eq!(s, start);
    }

    #[test]
    fn wild_cursor_is_clamped_before_the_edit() {
        let start = State::new(Buffer::from_lines(["ab"]), Cursor::new(7, 40));
        let s = transition(&start, Key::Char('c'), Semantics::CursorAware);
        assert_eq!(lines_of(&s), ["abc"]);
        assert_eq!(s.cursor, Cursor::new(0, 3));
    }

    #[test]
    fn cursor_stays_in_bounds_after_every_transition() {
        let mut s = State::new(Buffer::from_lines(["seed line"]), Cursor::new(0, 9));
        for byte in 0..=u8::MAX {
            s = transition(&s, decode(byte), Semantics::CursorAware);
            let c = s.cursor;
            assert!(c.row < s.buffer.line_count());
            assert!(c.col <= s.buffer.grapheme_len(c.row));
        }
    }

    // -- Purity & invariants ------------------------------------------------

    #[test]
    fn transition_is_pure() {
        // Same (state, key) twice — equal results, no hidden mutation.
        let start = State::new(Buffer::from_lines(["ab", "cd"]), Cursor::new(1, 1));
        for semantics in [Semantics::Legacy, Semantics::CursorAware] {
            for key in [Key::Char('x'), Key::Enter, Key::Interrupt] {
                let first = transition(&start, key, semantics);
                let second = transition(&start, key, semantics);
                assert_eq!(first, second);
                // The input state itself is untouched.
                assert_eq!(start.buffer.line(0), Some("ab"));
            }
        }
    }

    #[test]
    fn buffer_is_never_empty() {
        // Drive both rule sets through every byte value; the one
        // structural invariant must hold at every step.
        for semantics in [Semantics::Legacy, Semantics::CursorAware] {
            let mut s = State::blank();
            for byte in 0..=u8::MAX {
                if byte == 0x03 {
                    continue; // consumed by the run loop, not the machine
                }
                s = transition(&s, decode(byte), semantics);
                assert!(s.buffer.line_count() >= 1);
            }
        }
    }

    #[test]
    fn semantics_default_is_cursor_aware() {
        assert_eq!(Semantics::default(), Semantics::CursorAware);
    }
}
