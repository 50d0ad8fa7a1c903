// src/session/mod.rs
#![forbid(unsafe_code)]

pub mod menu;
pub mod runner;
pub mod state;
pub mod stats;

pub use menu::{MenuChoice, parse_choice};
pub use runner::{SessionEnd, run_session};
pub use state::{InsertOutcome, PlayOutcome, Session};
pub use stats::SessionStats;
