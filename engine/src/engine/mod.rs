// src/engine/mod.rs
#![forbid(unsafe_code)]

mod constants;
mod piece_rule;
mod pieces;
mod render;
mod ring;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use constants::{FIRST_PIECE_ID, INPUT_LINE_MAX, QUEUE_CAPACITY};
pub use piece_rule::{PieceGenerator, PieceRule, PieceRuleKind};
pub use pieces::{Kind, Piece};
pub use render::render_queue;
pub use ring::{PieceQueue, QueueFull, RingQueue};
