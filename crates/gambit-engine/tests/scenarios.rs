//! End-to-end scenarios played through the public move API, checking
//! that the searcher finds forced mates reachable via real game play.
//!
//! Positions here can't be built from a FEN literal the way the
//! teacher's integration tests do it — there's no FEN parser in scope
//! — so each scenario is reached by replaying the actual move sequence
//! from the initial position.

use std::time::Duration;

use gambit_core::{Game, Square};
use gambit_engine::Searcher;

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Helper: play `moves` (as `"e2e4"`-style four-character strings) from
/// the initial position and return the resulting game.
fn play(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for mv in moves {
        let (from, to) = mv.split_at(2);
        game.try_user_move(sq(from), sq(to), None).unwrap_or_else(|err| {
            panic!("expected {from}{to} to be legal: {err}");
        });
    }
    game
}

// ── Search correctness ──────────────────────────────────────────────

#[test]
fn finds_scholars_mate_queen_capture() {
    // 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6?? and now Qxf7# is on the board.
    let game = play(&["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6"]);

    let searcher = Searcher::new();
    let result = searcher
        .suggest_move(&game, Duration::from_millis(500))
        .expect("white to move with a legal move available");

    assert_eq!(result.best_move.to, sq("f7"), "expected the queen capture on f7, got {}", result.best_move);
    assert!(result.best_move.is_capture(), "Qxf7 should be flagged as a capture");
    assert!(result.score > gambit_engine::search::negamax::MATE_SCORE - 10, "score {} should indicate mate", result.score);
}

#[test]
fn fools_mate_leaves_white_checkmated() {
    // 1. f3 e5 2. g4 Qh4#
    let mut game = play(&["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert_eq!(
        gambit_core::state_of(&mut game, gambit_core::Color::White),
        gambit_core::GameState::Loss,
        "white should be checkmated after Qh4#"
    );
}
