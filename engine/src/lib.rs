// src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod session;

// Re-export the bits the CLI needs:
pub use engine::{
    FIRST_PIECE_ID, INPUT_LINE_MAX, Kind, Piece, PieceGenerator, PieceQueue, PieceRuleKind,
    QUEUE_CAPACITY, QueueFull, RingQueue, render_queue,
};
pub use session::{
    InsertOutcome, MenuChoice, PlayOutcome, Session, SessionEnd, SessionStats, parse_choice,
    run_session,
};
