//! # scrawl-editor — Editor core for scrawl
//!
//! The pure half of the editor. This crate contains:
//!
//! - **[`cursor`]** — `Cursor` (row, col) value type with cardinal movement
//! - **[`buffer`]** — the never-empty sequence of line strings
//! - **[`state`]** — `State` and the pure keystroke transition function
//! - **[`view`]** — deterministic frame rendering to any writer
//!
//! Nothing in here touches the terminal's configuration; raw mode and key
//! input live in `scrawl-term`. The only I/O is `view` writing rendered
//! frames to a caller-supplied writer.

pub mod buffer;
pub mod cursor;
pub mod state;
pub mod view;
