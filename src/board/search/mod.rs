//! Fixed-depth negamax search.
//!
//! - Alpha-beta over legal moves, one board copy per node
//! - Killer moves indexed by remaining depth, tried first
//! - Unpruned minimax kept as a reference
//! - Optional root splitting across threads

mod killers;
mod limits;
mod root;

use std::time::{Duration, Instant};

use super::eval::{Evaluator, PieceSquareEvaluator};
use super::{Board, Color, Move};

pub use killers::KillerTable;
pub use limits::{SearchLimits, DEFAULT_DEPTH};

/// Killer table rows; deeper searches stop recording killers past this.
pub const MAX_DEPTH: usize = 64;

/// Score bound. A node without legal moves returns `-INFINITY`.
pub const INFINITY: i32 = 1_000_000;

/// Best move and score of one node, relative to the side to move there.
///
/// `best_move` is `None` only when the side to move has no legal move
/// (checkmate or stalemate) or the depth was zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
}

impl SearchResult {
    #[must_use]
    pub const fn no_move() -> Self {
        SearchResult {
            best_move: None,
            score: -INFINITY,
        }
    }

    /// The side to move had no legal move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.best_move.is_none() && self.score == -INFINITY
    }
}

/// Which way a score is read.
///
/// Negamax always scores for the side to move. `Maximizing` reports that
/// score as is and `Minimizing` reports its negation, so the same position
/// searched from both perspectives gives opposite scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perspective {
    Maximizing,
    Minimizing,
}

impl Perspective {
    /// White maximizes, Black minimizes.
    #[must_use]
    pub const fn for_side(color: Color) -> Self {
        match color {
            Color::White => Perspective::Maximizing,
            Color::Black => Perspective::Minimizing,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Perspective::Maximizing => Perspective::Minimizing,
            Perspective::Minimizing => Perspective::Maximizing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn orient(self, score: i32) -> i32 {
        match self {
            Perspective::Maximizing => score,
            Perspective::Minimizing => -score,
        }
    }
}

/// Node counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Per-search state threaded through the recursion next to the killers.
pub struct SearchContext<'a> {
    evaluator: &'a dyn Evaluator,
    pub stats: SearchStats,
    trace_depth: Option<u32>,
}

impl<'a> SearchContext<'a> {
    #[must_use]
    pub fn new(evaluator: &'a dyn Evaluator) -> Self {
        SearchContext {
            evaluator,
            stats: SearchStats::default(),
            trace_depth: None,
        }
    }

    /// Log every move searched at `depth` at debug level.
    #[must_use]
    pub fn trace_depth(mut self, depth: u32) -> Self {
        self.trace_depth = Some(depth);
        self
    }
}

/// Negamax alpha-beta to a fixed remaining `depth`.
///
/// Legal killers recorded for `depth` are tried first. A child score that
/// reaches `beta` stops the scan and becomes a killer for `depth`. Ties keep
/// the earlier move.
pub fn alpha_beta(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    killers: &mut KillerTable,
    ctx: &mut SearchContext<'_>,
) -> SearchResult {
    ctx.stats.nodes += 1;

    if depth == 0 {
        return SearchResult {
            best_move: None,
            score: ctx.evaluator.evaluate(board),
        };
    }

    let mut moves = board.generate_moves();
    killers.order_front(depth, &mut moves);

    let mut best = SearchResult::no_move();
    for &mv in &moves {
        let child = board.with_move(mv);
        let score = -alpha_beta(&child, depth - 1, -beta, -alpha, killers, ctx).score;

        if ctx.trace_depth == Some(depth) {
            log::debug!("move {mv} score {score}");
        }

        if best.best_move.is_none() || score > best.score {
            best = SearchResult {
                best_move: Some(mv),
                score,
            };
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            killers.update(depth, mv);
            ctx.stats.cutoffs += 1;
            break;
        }
    }
    best
}

/// Full-width negamax without pruning or move ordering.
///
/// Same tie rule as [`alpha_beta`]: the first move in generation order with
/// the best score wins.
pub fn minimax(board: &Board, depth: u32, evaluator: &dyn Evaluator) -> SearchResult {
    if depth == 0 {
        return SearchResult {
            best_move: None,
            score: evaluator.evaluate(board),
        };
    }

    let mut best = SearchResult::no_move();
    for &mv in &board.generate_moves() {
        let score = -minimax(&board.with_move(mv), depth - 1, evaluator).score;
        if best.best_move.is_none() || score > best.score {
            best = SearchResult {
                best_move: Some(mv),
                score,
            };
        }
    }
    best
}

/// Search `board` to `depth` and read the root score from `perspective`.
pub fn search_as(
    board: &Board,
    depth: u32,
    perspective: Perspective,
    evaluator: &dyn Evaluator,
) -> SearchResult {
    let mut killers = KillerTable::new();
    let mut ctx = SearchContext::new(evaluator);
    let result = alpha_beta(board, depth, -INFINITY, INFINITY, &mut killers, &mut ctx);
    SearchResult {
        best_move: result.best_move,
        score: perspective.orient(result.score),
    }
}

/// Outcome of [`search`].
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    pub best_move: Option<Move>,
    /// Score for the side to move at the root.
    pub score: i32,
    pub depth: u32,
    pub side_to_move: Color,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchReport {
    /// Root score from White's point of view.
    #[must_use]
    pub fn white_score(&self) -> i32 {
        Perspective::for_side(self.side_to_move).orient(self.score)
    }
}

/// Fixed-depth search honouring `limits.depth` and `limits.threads`.
pub fn search(board: &Board, limits: &SearchLimits, evaluator: &dyn Evaluator) -> SearchReport {
    let start = Instant::now();
    let depth = limits.depth;

    let (result, stats) = if limits.threads > 1 && depth > 0 {
        let moves = board.generate_moves();
        root::split_root(board, &moves, depth, limits.threads, evaluator)
    } else {
        let mut killers = KillerTable::new();
        let mut ctx = SearchContext::new(evaluator).trace_depth(depth);
        let result = alpha_beta(board, depth, -INFINITY, INFINITY, &mut killers, &mut ctx);
        (result, ctx.stats)
    };

    let report = SearchReport {
        best_move: result.best_move,
        score: result.score,
        depth,
        side_to_move: board.side_to_move(),
        stats,
        elapsed: start.elapsed(),
    };

    match report.best_move {
        Some(mv) => log::info!(
            "depth {} threads {} nodes {} cutoffs {} score {} (white {}) best {} in {:?}",
            depth,
            limits.threads,
            stats.nodes,
            stats.cutoffs,
            report.score,
            report.white_score(),
            mv,
            report.elapsed
        ),
        None if depth > 0 => log::info!("no legal move for {}", report.side_to_move),
        None => {}
    }

    report
}

/// Best move at `depth` with the default evaluator, single-threaded.
#[must_use]
pub fn find_best_move(board: &Board, depth: u32) -> Option<Move> {
    search(board, &SearchLimits::depth(depth), &PieceSquareEvaluator).best_move
}
