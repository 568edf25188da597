//! The alpha-beta negamax kernel.

use gambit_core::{fingerprint_of, is_check, legal_moves, Game};

use super::control::SearchControl;
use super::tt::{self, Bound, TranspositionTable, TtEntry};
use crate::eval::evaluate_for;

/// Larger than any real evaluation or mate score, used as the initial
/// alpha-beta window.
pub const INF: i32 = 1_000_000;

/// Score assigned to an immediate checkmate; deeper mates are scored
/// closer to zero so the search prefers the shortest forced mate.
pub const MATE_SCORE: i32 = 30_000;

/// Search `game` to `depth` plies, returning a score from the current
/// side to move's perspective.
///
/// `extended` tracks whether this line has already used its one-ply
/// capture extension at the horizon, so a long forcing sequence of
/// captures only ever gets a single extra ply, not one per capture.
#[allow(clippy::too_many_arguments)]
pub(crate) fn negamax(
    game: &mut Game,
    depth: u32,
    alpha: i32,
    beta: i32,
    ply: u32,
    tt: &mut TranspositionTable,
    control: &SearchControl,
    nodes: &mut u64,
    extended: bool,
) -> i32 {
    *nodes += 1;

    let color = game.side_to_move();
    if control.expired() {
        return evaluate_for(game, color);
    }

    let key = fingerprint_of(game);
    let mut alpha = alpha;
    let mut beta = beta;

    if let Some(entry) = tt.get(&key) {
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::LowerBound => alpha = alpha.max(entry.score),
                Bound::UpperBound => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }
    }

    let moves = legal_moves(game, color);
    if moves.is_empty() {
        return if is_check(game, color) {
            -(MATE_SCORE - ply as i32)
        } else {
            0
        };
    }

    if depth == 0 {
        return evaluate_for(game, color);
    }

    let alpha_orig = alpha;
    let mut best_score = -INF;
    let mut best_move = moves[0];

    for mv in moves {
        game.apply(mv);
        let extend = depth == 1 && mv.is_capture() && !extended;
        let child_depth = if extend { 1 } else { depth - 1 };
        let score = -negamax(game, child_depth, -beta, -alpha, ply + 1, tt, control, nodes, extended || extend);
        game.undo(mv);

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    let bound = if best_score <= alpha_orig {
        Bound::UpperBound
    } else if best_score >= beta {
        Bound::LowerBound
    } else {
        Bound::Exact
    };
    tt::store(tt, key, TtEntry { depth, score: best_score, bound, best_move });

    best_score
}
