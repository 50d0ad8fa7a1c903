// src/engine/pieces.rs
#![forbid(unsafe_code)]

use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Kind {
    #[default]
    I,
    O,
    T,
    L,
}

impl Kind {
    pub fn all() -> &'static [Kind] {
        use Kind::*;
        &[I, O, T, L]
    }

    pub fn glyph(self) -> char {
        use Kind::*;
        match self {
            I => 'I',
            O => 'O',
            T => 'T',
            L => 'L',
        }
    }
}

/// One queued future piece.
///
/// `id` is unique within a session and strictly increasing in generation order.
/// The default value (`I`, id 0) only ever fills never-written ring slots.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Piece {
    pub kind: Kind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: Kind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind '{}'  ID {}", self.kind.glyph(), self.id)
    }
}
