// src/engine/constants.rs
#![forbid(unsafe_code)]

/// Fixed number of slots in the upcoming-piece queue.
pub const QUEUE_CAPACITY: usize = 5;

/**
 * Upper bound (in bytes, terminator included) of one menu input line.
 * - Only the first `INPUT_LINE_MAX - 1` bytes of a line are parsed.
 * - The remainder of an overlong line is consumed and discarded.
 */
pub const INPUT_LINE_MAX: usize = 64;

/// First id handed out in a session.
pub const FIRST_PIECE_ID: u32 = 1;
