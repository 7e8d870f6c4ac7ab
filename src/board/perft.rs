//! Move path enumeration.
//!
//! Counting leaf positions to a fixed depth is the standard check that the
//! generator, the legality filter and the transition agree with known
//! reference counts.

use std::time::{Duration, Instant};

use super::error::FenError;
use super::{Board, Move};

/// A reference position with its expected leaf count.
#[derive(Clone, Copy, Debug)]
pub struct PerftCase {
    pub name: &'static str,
    pub fen: &'static str,
    pub depth: u32,
    pub nodes: u64,
}

/// Published perft results (chessprogramming.org, "Perft Results").
pub const REFERENCE_SUITE: &[PerftCase] = &[
    PerftCase {
        name: "initial position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 6,
        nodes: 119_060_324,
    },
    PerftCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 5,
        nodes: 193_690_690,
    },
    PerftCase {
        name: "position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 7,
        nodes: 178_633_661,
    },
    PerftCase {
        name: "position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depth: 6,
        nodes: 706_045_033,
    },
    PerftCase {
        name: "position 4 mirrored",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        depth: 6,
        nodes: 706_045_033,
    },
    PerftCase {
        name: "position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depth: 5,
        nodes: 89_941_194,
    },
    PerftCase {
        name: "position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depth: 5,
        nodes: 164_075_551,
    },
];

impl Board {
    /// Number of legal move paths of length `depth` from this position.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| self.with_move(mv).perft(depth - 1))
            .sum()
    }

    /// Perft split by root move, in generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.generate_moves()
            .iter()
            .map(|&mv| (mv, self.with_move(mv).perft(depth - 1)))
            .collect()
    }
}

/// Result of running one [`PerftCase`].
#[derive(Clone, Debug)]
pub struct PerftOutcome {
    pub case: PerftCase,
    /// Leaf count, or the FEN error if the position did not parse.
    pub nodes: Result<u64, FenError>,
    pub elapsed: Duration,
}

impl PerftOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.nodes.as_ref().is_ok_and(|&n| n == self.case.nodes)
    }
}

/// Run each case and log one line per case plus a summary.
pub fn run_suite(cases: &[PerftCase]) -> Vec<PerftOutcome> {
    let mut outcomes = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let start = Instant::now();
        let nodes = Board::try_from_fen(case.fen).map(|board| board.perft(case.depth));
        let outcome = PerftOutcome {
            case: *case,
            nodes,
            elapsed: start.elapsed(),
        };

        match &outcome.nodes {
            Err(err) => log::error!("test {idx:02} ({}): parse error: {err}", case.name),
            Ok(n) if outcome.passed() => {
                log::info!("test {idx:02} ({}): {n} nodes in {:?}", case.name, outcome.elapsed);
            }
            Ok(n) => log::error!(
                "test {idx:02} ({}): {n} nodes, expected {}",
                case.name,
                case.nodes
            ),
        }
        outcomes.push(outcome);
    }

    let passed = outcomes.iter().filter(|o| o.passed()).count();
    log::info!("{passed}/{} tests passed", outcomes.len());
    outcomes
}
