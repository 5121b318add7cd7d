// SPDX-License-Identifier: MIT
//
// scrawl-term — Terminal control for scrawl.
//
// The editor's raw terminal I/O layer: byte-level ANSI escape sequence
// generation, termios raw-mode lifecycle with RAII cleanup, and one-byte
// key input. This crate intentionally avoids external TUI frameworks
// (ratatui, crossterm) in favor of direct terminal control via ANSI
// escape sequences and raw termios. Every byte sent to the terminal is
// accounted for.

pub mod ansi;
pub mod input;
pub mod terminal;
