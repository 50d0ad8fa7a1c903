// src/session/stats.rs
#![forbid(unsafe_code)]

/// Per-session action counters. Reporting only; never drives behavior.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionStats {
    pub plays: u64,
    pub empty_plays: u64,
    pub inserts: u64,
    pub rejected_inserts: u64,
    pub invalid_inputs: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_play(&mut self, played: bool) {
        if played {
            self.plays += 1;
        } else {
            self.empty_plays += 1;
        }
    }

    pub fn on_insert(&mut self, inserted: bool) {
        if inserted {
            self.inserts += 1;
        } else {
            self.rejected_inserts += 1;
        }
    }

    pub fn on_invalid_input(&mut self) {
        self.invalid_inputs += 1;
    }

    /// Total menu lines handled, valid or not.
    pub fn actions(&self) -> u64 {
        self.plays + self.empty_plays + self.inserts + self.rejected_inserts + self.invalid_inputs
    }

    /// One-line summary (useful for logs / grep).
    pub fn summary_line(&self) -> String {
        format!(
            "plays={} empty_plays={} inserts={} rejected_inserts={} invalid_inputs={}",
            self.plays, self.empty_plays, self.inserts, self.rejected_inserts, self.invalid_inputs,
        )
    }
}
