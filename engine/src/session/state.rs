// src/session/state.rs
#![forbid(unsafe_code)]

use crate::engine::{
    FIRST_PIECE_ID, Piece, PieceGenerator, PieceQueue, PieceRuleKind, render_queue,
};

use super::stats::SessionStats;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayOutcome {
    Played(Piece),
    Empty,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InsertOutcome {
    Inserted(Piece),
    /// Queue was full; no piece was generated and no id consumed.
    Full,
    /// Every `u32` id has been handed out; nothing was generated.
    IdsExhausted,
}

/**
 * Pure session state: the piece queue, the generator and the id counter.
 *
 * No I/O happens here; `run_session` drives it from a line-oriented console.
 * The id counter is owned by the session and passed to the generator by value,
 * so ids are strictly increasing from `FIRST_PIECE_ID` in generation order.
 */
#[derive(Clone)]
pub struct Session {
    queue: PieceQueue,
    generator: PieceGenerator,
    /// None once `u32::MAX` has been handed out.
    next_id: Option<u32>,

    pub stats: SessionStats,
}

impl Session {
    /// Empty queue, then pre-filled to capacity (ids 1..=C).
    pub fn new(seed: u64, rule_kind: PieceRuleKind) -> Self {
        let mut s = Self::new_empty(seed, rule_kind);
        s.prefill();
        s
    }

    /// Session whose queue starts empty (no pre-fill, no ids consumed).
    pub fn new_empty(seed: u64, rule_kind: PieceRuleKind) -> Self {
        Self::new_empty_with_first_id(seed, rule_kind, FIRST_PIECE_ID)
    }

    /// Empty session whose first generated piece carries `first_id`.
    pub fn new_empty_with_first_id(seed: u64, rule_kind: PieceRuleKind, first_id: u32) -> Self {
        Self {
            queue: PieceQueue::new(),
            generator: PieceGenerator::new(seed, rule_kind),
            next_id: Some(first_id),
            stats: SessionStats::new(),
        }
    }

    fn prefill(&mut self) {
        while !self.queue.is_full() {
            let Some(id) = self.take_id() else {
                break;
            };
            let piece = self.generator.generate(id);
            if self.queue.enqueue(piece).is_err() {
                break;
            }
        }
    }

    fn take_id(&mut self) -> Option<u32> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(id)
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    /// Id the next generated piece will carry, None when ids are exhausted.
    pub fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    pub fn rule_kind(&self) -> PieceRuleKind {
        self.generator.rule_kind()
    }

    pub fn play(&mut self) -> PlayOutcome {
        let out = match self.queue.dequeue() {
            Some(p) => PlayOutcome::Played(p),
            None => PlayOutcome::Empty,
        };
        self.stats.on_play(matches!(out, PlayOutcome::Played(_)));
        out
    }

    pub fn insert(&mut self) -> InsertOutcome {
        // Check first so a rejected insert never burns an id.
        let out = if self.queue.is_full() {
            InsertOutcome::Full
        } else if let Some(id) = self.take_id() {
            let piece = self.generator.generate(id);
            match self.queue.enqueue(piece) {
                Ok(()) => InsertOutcome::Inserted(piece),
                Err(_) => InsertOutcome::Full,
            }
        } else {
            InsertOutcome::IdsExhausted
        };
        self.stats.on_insert(matches!(out, InsertOutcome::Inserted(_)));
        out
    }

    pub fn render(&self) -> String {
        render_queue(&self.queue)
    }
}
