// src/engine/piece_rule.rs
use rand::prelude::*;

use crate::engine::pieces::{Kind, Piece};

const BAG_LEN: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PieceRuleKind {
    Uniform,
    Bag,
}

impl PieceRuleKind {
    pub fn from_cli(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bag" | "bag4" | "4bag" => PieceRuleKind::Bag,
            _ => PieceRuleKind::Uniform,
        }
    }
}

#[derive(Clone)]
pub struct PieceRule {
    kind: PieceRuleKind,

    // RNG lives here (kind stream responsibility)
    rng: StdRng,

    // bag state (only used if kind == Bag)
    bag: [Kind; BAG_LEN],
    bag_idx: usize,
}

impl PieceRule {
    pub fn new(seed: u64, kind: PieceRuleKind) -> Self {
        Self {
            kind,
            rng: StdRng::seed_from_u64(seed),
            bag: [Kind::I, Kind::O, Kind::T, Kind::L],
            bag_idx: BAG_LEN, // force refill on first Bag draw
        }
    }

    pub fn kind(&self) -> PieceRuleKind {
        self.kind
    }

    fn refill_bag(&mut self) {
        self.bag = [Kind::I, Kind::O, Kind::T, Kind::L];
        self.bag.shuffle(&mut self.rng);
        self.bag_idx = 0;
    }

    pub fn draw(&mut self) -> Kind {
        match self.kind {
            PieceRuleKind::Uniform => {
                let all = Kind::all();
                all[self.rng.gen_range(0..all.len())]
            }
            PieceRuleKind::Bag => {
                if self.bag_idx >= BAG_LEN {
                    self.refill_bag();
                }
                let k = self.bag[self.bag_idx];
                self.bag_idx += 1;
                k
            }
        }
    }
}

/// Builds pieces from a caller-provided id and a kind drawn from the rule.
///
/// The id counter is owned by the caller; this type never invents ids.
#[derive(Clone)]
pub struct PieceGenerator {
    rule: PieceRule,
}

impl PieceGenerator {
    pub fn new(seed: u64, kind: PieceRuleKind) -> Self {
        Self {
            rule: PieceRule::new(seed, kind),
        }
    }

    pub fn rule_kind(&self) -> PieceRuleKind {
        self.rule.kind()
    }

    pub fn generate(&mut self, id: u32) -> Piece {
        Piece::new(self.rule.draw(), id)
    }
}
