//! Line buffer — the in-memory text being edited.
//!
//! The buffer is an ordered sequence of line strings: insertion order is
//! display order is line number. Its one structural invariant is that the
//! sequence is **never empty** — a blank buffer holds a single empty line.
//! The invariant is enforced by construction: no constructor or editing
//! operation can produce a zero-line buffer.
//!
//! # Design choices
//!
//! - **Immutable editing.** Every operation takes `&self` and returns a new
//!   `Buffer`. The editor threads a single `State` value through its loop,
//!   replacing it on each keystroke; mutation in place would break the pure
//!   transition contract. The buffers here are a handful of short lines, so
//!   the clone per keystroke is noise.
//!
//! - **Columns are grapheme offsets**, not bytes. Column 3 of `"café"` is
//!   `'é'`, not a byte in the middle of its UTF-8 encoding. The
//!   grapheme→byte mapping goes through `unicode-segmentation`; byte
//!   offsets never leak into the public API.
//!
//! - **Total operations.** Out-of-range rows and columns are clamped into
//!   the buffer rather than rejected — the editing state machine has no
//!   failure modes, so nothing here returns `Result` or panics.

use unicode_segmentation::UnicodeSegmentation;

/// The byte offset of grapheme column `col` in `line`.
///
/// Columns past the last grapheme map to the end of the line (the
/// insert-at-end slot).
fn byte_index(line: &str, col: usize) -> usize {
    line.grapheme_indices(true)
        .nth(col)
        .map_or(line.len(), |(idx, _)| idx)
}

/// An ordered, never-empty sequence of text lines.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// A buffer holding a single empty line. The starting buffer of a
    /// blank editor.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a buffer from lines. An empty input yields [`blank`](Self::blank)
    /// — the never-empty invariant holds for every constructor.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            Self::blank()
        } else {
            Self { lines }
        }
    }

    // -- Access -------------------------------------------------------------

    /// Number of lines. Always at least 1.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// A line by 0-indexed row. `None` if `row >= line_count()`.
    #[inline]
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Iterate the lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Grapheme length of a line — the cursor's column limit for that row.
    /// Rows past the end report 0.
    #[must_use]
    pub fn grapheme_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, |l| l.graphemes(true).count())
    }

    // -- Editing ------------------------------------------------------------
    //
    // Each operation returns a new buffer; `self` is untouched. Rows are
    // clamped to the last line, columns to the line's grapheme length.

    /// Append a character to the end of a line.
    ///
    /// The legacy insertion primitive — position within the line is not
    /// consulted, the character always lands at the end.
    #[must_use]
    pub fn append_char(&self, row: usize, ch: char) -> Self {
        let row = row.min(self.lines.len() - 1);
        let mut lines = self.lines.clone();
        lines[row].push(ch);
        Self { lines }
    }

    /// Insert a character at a grapheme column within a line.
    #[must_use]
    pub fn insert_char(&self, row: usize, col: usize, ch: char) -> Self {
        let row = row.min(self.lines.len() - 1);
        let mut lines = self.lines.clone();
        let at = byte_index(&lines[row], col);
        lines[row].insert(at, ch);
        Self { lines }
    }

    /// Split a line in two at a grapheme column.
    ///
    /// The text before the column stays on `row`; the text from the column
    /// onward becomes a new line at `row + 1`. Splitting at column 0 pushes
    /// the whole line down; splitting at the end opens an empty line below.
    #[must_use]
    pub fn split_line(&self, row: usize, col: usize) -> Self {
        let row = row.min(self.lines.len() - 1);
        let mut lines = self.lines.clone();
        let at = byte_index(&lines[row], col);
        let tail = lines[row].split_off(at);
        lines.insert(row + 1, tail);
        Self { lines }
    }

    /// Append a whole line at the end of the buffer.
    #[must_use]
    pub fn push_line(&self, text: impl Into<String>) -> Self {
        let mut lines = self.lines.clone();
        lines.push(text.into());
        Self { lines }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
