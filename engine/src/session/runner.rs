// src/session/runner.rs
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Read, Write};

use log::{debug, info, warn};

use crate::engine::INPUT_LINE_MAX;

use super::menu::{MENU_TEXT, MenuChoice, parse_choice};
use super::state::{InsertOutcome, PlayOutcome, Session};

const BANNER: &str = "Tetris Stack - upcoming piece queue simulator";

/// How the menu loop ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionEnd {
    /// User chose option 3.
    Quit,
    /// Input stream ended; treated like a quit.
    InputClosed,
}

/// Consumes input up to and including the next `\n`, keeping nothing.
///
/// Returns the number of bytes dropped before the newline.
fn discard_rest_of_line<R: BufRead>(input: &mut R) -> io::Result<usize> {
    let mut dropped = 0;
    loop {
        let (used, hit_newline) = {
            let buf = match input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok(dropped);
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (buf.len(), false),
            }
        };
        input.consume(used);
        if hit_newline {
            return Ok(dropped + used - 1);
        }
        dropped += used;
    }
}

/**
 * Reads one menu line.
 *
 * - `Ok(None)` means the input is exhausted.
 * - At most `INPUT_LINE_MAX - 1` bytes are buffered; the rest of an overlong
 *   line is consumed and dropped, so it never reaches the next read.
 * - Invalid UTF-8 is replaced lossily.
 */
fn read_menu_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let keep = INPUT_LINE_MAX - 1;
    let mut raw = Vec::with_capacity(keep);
    if input.by_ref().take(keep as u64).read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }

    if raw.last() != Some(&b'\n') {
        let dropped = discard_rest_of_line(input)?;
        if dropped > 0 {
            warn!("input line truncated to {keep} bytes ({dropped} bytes dropped)");
        }
    }
    while matches!(raw.last(), Some(b'\n') | Some(b'\r')) {
        raw.pop();
    }

    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}

/**
 * Interactive menu loop over any line source and sink.
 *
 * States: Running until option 3 or end of input, then Terminated.
 * Every action prints one message followed by a full render of the queue;
 * invalid lines print a message and re-prompt without touching the queue.
 */
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<SessionEnd> {
    writeln!(out, "{BANNER}")?;
    writeln!(
        out,
        "Queue initialized with {} pieces.",
        session.queue().capacity()
    )?;
    write!(out, "{}", session.render())?;

    let end = loop {
        write!(out, "{MENU_TEXT}")?;
        out.flush()?;

        let line = match read_menu_line(input)? {
            Some(line) => line,
            None => {
                info!("input closed; ending session");
                writeln!(out, "\nEnd of input. Exiting. Goodbye.")?;
                break SessionEnd::InputClosed;
            }
        };

        let Some(n) = parse_choice(&line) else {
            debug!("unparsable menu line: {line:?}");
            session.stats.on_invalid_input();
            write!(out, "Invalid input. Try again.\n\n")?;
            continue;
        };

        match MenuChoice::try_from(n) {
            Ok(MenuChoice::Play) => {
                match session.play() {
                    PlayOutcome::Played(p) => writeln!(out, "\nPiece played: {p}")?,
                    PlayOutcome::Empty => {
                        writeln!(out, "\nThe queue is empty. There is no piece to play.")?
                    }
                }
                write!(out, "{}", session.render())?;
            }
            Ok(MenuChoice::Insert) => {
                match session.insert() {
                    InsertOutcome::Inserted(p) => writeln!(out, "\nNew piece inserted: {p}")?,
                    InsertOutcome::Full => {
                        writeln!(out, "\nThe queue is full. Cannot insert a new piece.")?
                    }
                    InsertOutcome::IdsExhausted => {
                        writeln!(out, "\nNo piece ids left. Cannot insert a new piece.")?
                    }
                }
                write!(out, "{}", session.render())?;
            }
            Ok(MenuChoice::Quit) => {
                writeln!(out, "\nExiting. Goodbye.")?;
                break SessionEnd::Quit;
            }
            Err(other) => {
                debug!("menu option out of range: {other}");
                session.stats.on_invalid_input();
                write!(out, "Invalid option. Choose 1, 2 or 3.\n\n")?;
            }
        }
    };

    out.flush()?;
    info!("session ended ({end:?}): {}", session.stats.summary_line());
    Ok(end)
}
