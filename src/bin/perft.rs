//! Perft runner.
//!
//! With no arguments, runs the reference suite and exits non-zero on any
//! mismatch. `perft <depth> [fen]` prints a divide for one position.

use std::process::ExitCode;
use std::time::Instant;

use log::LevelFilter;
use mailbox_engine::board::perft::{run_suite, REFERENCE_SUITE};
use mailbox_engine::board::Board;
use mailbox_engine::logger;

fn main() -> ExitCode {
    if let Err(e) = logger::init_with_default(LevelFilter::Info) {
        eprintln!("logger: {e}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        None => {
            let outcomes = run_suite(REFERENCE_SUITE);
            if outcomes.iter().all(|o| o.passed()) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Some((depth, fen)) => {
            let Ok(depth) = depth.parse::<u32>() else {
                eprintln!("usage: perft [<depth> [fen]]");
                return ExitCode::FAILURE;
            };
            let board = if fen.is_empty() {
                Board::new()
            } else {
                match Board::try_from_fen(&fen.join(" ")) {
                    Ok(board) => board,
                    Err(e) => {
                        eprintln!("{e}");
                        return ExitCode::FAILURE;
                    }
                }
            };
            divide(&board, depth);
            ExitCode::SUCCESS
        }
    }
}

fn divide(board: &Board, depth: u32) {
    let start = Instant::now();
    let split = board.perft_divide(depth);
    for (mv, nodes) in &split {
        println!("{mv}: {nodes}");
    }
    let total: u64 = if depth == 0 {
        1
    } else {
        split.iter().map(|&(_, n)| n).sum()
    };
    println!();
    println!("Nodes searched: {total}");
    log::info!("perft {depth}: {total} nodes in {:?}", start.elapsed());
}
