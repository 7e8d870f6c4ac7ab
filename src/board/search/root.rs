//! Root splitting across worker threads.
//!
//! Root moves are dealt round-robin to scoped workers. Each worker owns its
//! board copies and its own killer table; the only shared state is the
//! result collector. Every root move is searched with a full window, so each
//! score is exact and the merged choice (best score, earliest root move on
//! ties) equals what the sequential search returns.

use std::thread;

use parking_lot::Mutex;

use crate::board::eval::Evaluator;
use crate::board::{Board, Move, MoveList};

use super::{alpha_beta, KillerTable, SearchContext, SearchResult, SearchStats, INFINITY};

/// Worker thread stack size
const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

#[derive(Clone, Copy, Debug)]
struct RootScore {
    index: usize,
    mv: Move,
    score: i32,
}

/// Search every root move in `moves` on up to `threads` workers.
pub(super) fn split_root(
    board: &Board,
    moves: &MoveList,
    depth: u32,
    threads: usize,
    evaluator: &dyn Evaluator,
) -> (SearchResult, SearchStats) {
    let workers = threads.clamp(1, moves.len().max(1));
    let scores: Mutex<Vec<RootScore>> = Mutex::new(Vec::with_capacity(moves.len()));
    let totals: Mutex<SearchStats> = Mutex::new(SearchStats::default());

    let (scores_ref, totals_ref) = (&scores, &totals);

    thread::scope(|scope| {
        for worker_id in 0..workers {
            let run = move || {
                run_worker(worker_id, workers, board, moves, depth, evaluator, scores_ref, totals_ref);
            };
            let spawned = thread::Builder::new()
                .name(format!("root-{worker_id}"))
                .stack_size(WORKER_STACK_SIZE)
                .spawn_scoped(scope, run);
            if let Err(err) = spawned {
                log::warn!("could not spawn root worker {worker_id}: {err}; searching inline");
                run_worker(worker_id, workers, board, moves, depth, evaluator, scores_ref, totals_ref);
            }
        }
    });

    let mut scores = scores.into_inner();
    scores.sort_by_key(|entry| entry.index);

    let mut best = SearchResult::no_move();
    for entry in &scores {
        if best.best_move.is_none() || entry.score > best.score {
            best = SearchResult {
                best_move: Some(entry.mv),
                score: entry.score,
            };
        }
    }
    (best, totals.into_inner())
}

#[allow(clippy::too_many_arguments)]
fn run_worker(
    worker_id: usize,
    workers: usize,
    board: &Board,
    moves: &MoveList,
    depth: u32,
    evaluator: &dyn Evaluator,
    scores: &Mutex<Vec<RootScore>>,
    totals: &Mutex<SearchStats>,
) {
    let mut killers = KillerTable::new();
    let mut ctx = SearchContext::new(evaluator);
    ctx.stats.nodes += 1;

    for (index, &mv) in moves.iter().enumerate().skip(worker_id).step_by(workers) {
        let child = board.with_move(mv);
        let score = -alpha_beta(&child, depth - 1, -INFINITY, INFINITY, &mut killers, &mut ctx).score;
        log::debug!("root move {mv} score {score} (worker {worker_id})");
        scores.lock().push(RootScore { index, mv, score });
    }

    totals.lock().merge(&ctx.stats);
}
