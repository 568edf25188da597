//! Iterative-deepening search with a fresh transposition table per call.

pub mod control;
pub mod negamax;
pub mod ordering;
pub mod tt;

use std::time::Duration;

use gambit_core::{legal_moves, Game, Move};
use tracing::debug;

use control::SearchControl;
use negamax::{negamax, INF};
use ordering::{bubble_to_front, order_by_material_delta};
use tt::TranspositionTable;

/// The outcome of a completed (non-aborted) search iteration.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub depth: u32,
    pub nodes: u64,
}

/// Picks a move by iterative-deepening alpha-beta search within a
/// wall-clock budget.
#[derive(Debug, Default)]
pub struct Searcher;

impl Searcher {
    pub fn new() -> Searcher {
        Searcher
    }

    /// Search `game` and return the best move found, or `None` if the
    /// side to move has no legal move.
    ///
    /// Deepens from depth 2, re-ordering the root move list by the
    /// previous iteration's best move after each completed depth. A
    /// depth that doesn't finish within `budget` is discarded entirely
    /// — only fully-searched depths are reported.
    pub fn suggest_move(&self, game: &Game, budget: Duration) -> Option<SearchResult> {
        let mut game = game.clone();
        let color = game.side_to_move();
        let mut moves = legal_moves(&mut game, color);
        if moves.is_empty() {
            return None;
        }
        order_by_material_delta(&mut game, &mut moves);

        let control = SearchControl::new(budget);
        let mut best: Option<SearchResult> = None;
        let mut depth = 2u32;

        while !control.expired() {
            let mut tt = TranspositionTable::new();
            let mut nodes = 0u64;
            let mut alpha = -INF;
            let beta = INF;
            let mut iter_best_score = -INF;
            let mut iter_best_move = moves[0];
            let mut aborted = false;

            for &mv in &moves {
                game.apply(mv);
                let score = -negamax(&mut game, depth - 1, -beta, -alpha, 1, &mut tt, &control, &mut nodes, false);
                game.undo(mv);

                if control.expired() {
                    aborted = true;
                    break;
                }
                if score > iter_best_score {
                    iter_best_score = score;
                    iter_best_move = mv;
                }
                alpha = alpha.max(score);
            }

            if aborted {
                break;
            }

            debug!(depth, score = iter_best_score, nodes, best_move = %iter_best_move, "search iteration complete");
            best = Some(SearchResult { best_move: iter_best_move, score: iter_best_score, depth, nodes });
            bubble_to_front(&mut moves, iter_best_move);
            depth += 1;
        }

        best
    }
}
