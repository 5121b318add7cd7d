//! Cursor — a position in the buffer, moved by value.
//!
//! All coordinates are **0-indexed**: row 0 is the first buffer line,
//! column 0 the first grapheme of a line. Columns count grapheme clusters,
//! not bytes — the cursor steps over what the user perceives as one
//! character.
//!
//! # Value semantics
//!
//! The cursor is an immutable `Copy` value: every movement returns a new
//! `Cursor` rather than mutating in place, so a cursor can be threaded
//! through pure transition functions alongside the buffer.
//!
//! # Movement vs. bounds
//!
//! The movement primitives know nothing about any buffer. `up` and `left`
//! saturate at zero (coordinates are non-negative); `down` and `right` are
//! unbounded. Clamping to buffer extents is a separate, explicit step —
//! [`clamped`](Cursor::clamped) — applied by the state machine after each
//! transition, never baked into the arithmetic.

use std::fmt;

use crate::buffer::Buffer;

/// A position within the buffer: `(row, col)`, both 0-indexed.
///
/// Movement methods are defined here for all four cardinal directions even
/// though the keystroke dispatch does not yet bind them to any key — they
/// are the extension point for navigation input.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// The origin — row 0, column 0.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a cursor at a specific position.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// A cursor at the origin. The starting cursor of a blank editor.
    #[inline]
    #[must_use]
    pub const fn blank() -> Self {
        Self::ORIGIN
    }

    // -- Cardinal movement --------------------------------------------------
    //
    // `up().down()` and `left().right()` are identity for any cursor not
    // already on the zero edge; at row or column zero the saturating step
    // makes `up`/`left` a no-op, so the round trip lands one past where it
    // started. The tests pin down both halves of that contract.

    /// One row up. Saturates at row 0.
    #[inline]
    #[must_use]
    pub const fn up(self) -> Self {
        Self {
            row: self.row.saturating_sub(1),
            col: self.col,
        }
    }

    /// One row down.
    #[inline]
    #[must_use]
    pub const fn down(self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col,
        }
    }

    /// One column left. Saturates at column 0.
    #[inline]
    #[must_use]
    pub const fn left(self) -> Self {
        Self {
            row: self.row,
            col: self.col.saturating_sub(1),
        }
    }

    /// One column right.
    #[inline]
    #[must_use]
    pub const fn right(self) -> Self {
        Self {
            row: self.row,
            col: self.col + 1,
        }
    }

    // -- Bounds -------------------------------------------------------------

    /// This cursor clamped to the buffer's extents.
    ///
    /// Row is clamped to `[0, line_count - 1]`; column to `[0, len]` where
    /// `len` is the grapheme length of the clamped row's line. Column `len`
    /// (one past the last grapheme) is a valid position — it is where
    /// insertion at the end of a line happens.
    #[must_use]
    pub fn clamped(self, buffer: &Buffer) -> Self {
        let row = self.row.min(buffer.line_count() - 1);
        let col = self.col.min(buffer.grapheme_len(row));
        Self { row, col }
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({}:{})", self.row, self.col)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for human display.
        write!(f, "{}:{}", self.row + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
