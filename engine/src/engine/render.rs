// src/engine/render.rs
#![forbid(unsafe_code)]

use std::fmt::Write as _;

use crate::engine::pieces::Piece;
use crate::engine::ring::RingQueue;

/// Text listing of the queue, front (index 0) to back.
///
/// Positions are logical, so wraparound of the underlying buffer never shows.
/// Read-only; an empty queue renders a single `[empty]` line.
pub fn render_queue<const N: usize>(queue: &RingQueue<Piece, N>) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(s, "\nQueue state (capacity {}):", queue.capacity());
    if queue.is_empty() {
        s.push_str("  [empty]\n\n");
        return s;
    }
    s.push_str("  Index   Kind    ID\n");
    for (i, p) in queue.iter().enumerate() {
        let _ = writeln!(s, "  {:>5}   {:>4}  {:>4}", i, p.kind.glyph(), p.id);
    }
    s.push('\n');
    s
}
