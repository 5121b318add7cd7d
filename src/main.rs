// SPDX-License-Identifier: MIT
//
// scrawl — a tiny terminal text editor.
//
// This is the main binary that wires together the two crates:
//
//   scrawl-term   → raw mode lifecycle, one-byte key input, ANSI codec
//   scrawl-editor → buffer, cursor, pure transitions, frame rendering
//
// The control flow is a strict single-threaded read-eval-render loop.
// Each iteration fully completes before the next begins, and the blocking
// one-byte stdin read is the only suspension point:
//
//   enter raw mode → loop {
//       read one key
//       Ctrl-C → break
//       state = transition(state, key)
//       render(state)
//   } → terminal restored (guard runs on every exit path)
//
// No arguments, no files, no environment — running the program drops you
// straight into a blank buffer. Ctrl-C exits with status 0; a terminal
// setup failure or an unexpected stdin EOF exits with status 1 after the
// guard has restored the terminal.

use std::io::{self, Read, Write};
use std::process;

use scrawl_editor::state::{transition, Semantics, State};
use scrawl_editor::view;
use scrawl_term::input::{read_key, Key};
use scrawl_term::terminal::Terminal;

/// The read-eval-render loop, generic over its streams so tests can drive
/// it with byte slices and capture the frames.
///
/// Returns when the interrupt key arrives. Read failures (including EOF)
/// and render failures propagate to the caller, whose terminal guard runs
/// the raw-mode teardown.
fn run_loop(
    input: &mut impl Read,
    output: &mut impl Write,
    semantics: Semantics,
) -> io::Result<State> {
    let mut state = State::blank();
    view::render(output, &state)?;
    view::place_cursor(output, state.cursor)?;

    loop {
        let key = read_key(input)?;
        if key == Key::Interrupt {
            return Ok(state);
        }
        state = transition(&state, key, semantics);
        view::render(output, &state)?;
        view::place_cursor(output, state.cursor)?;
    }
}

fn run() -> io::Result<()> {
    let mut term = Terminal::new()?;
    term.enter()?;

    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_loop(
            &mut stdin.lock(),
            &mut stdout.lock(),
            Semantics::CursorAware,
        )
    };

    // Restore the terminal before surfacing any loop error. The guard's
    // Drop would catch this too; doing it here surfaces restore failures.
    term.leave()?;
    result.map(|_| ())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("scrawl: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
