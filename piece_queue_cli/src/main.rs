// src/main.rs
#![forbid(unsafe_code)]

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use log::info;

use piece_queue::{PieceRuleKind, Session, SessionEnd, run_session};

#[derive(Parser, Debug)]
#[command(name = "piece-queue")]
struct Args {
    /// RNG seed for piece kinds. If omitted, a time-based seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Piece rule: uniform | bag
    #[arg(long, default_value = "uniform")]
    piece_rule: String,
}

/// Seconds/nanos since the epoch folded into one value; 0 if the clock is before 1970.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()).rotate_left(32))
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(time_seed);
    let rule_kind = PieceRuleKind::from_cli(&args.piece_rule);
    info!("starting session: seed={seed} piece_rule={rule_kind:?}");

    let mut session = Session::new(seed, rule_kind);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = run_session(&mut session, &mut stdin.lock(), &mut stdout.lock())
        .context("console session failed")?;

    if end == SessionEnd::InputClosed {
        info!("exited on end of input");
    }
    Ok(())
}
