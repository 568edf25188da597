//! Root move ordering.
//!
//! Every node already gets captures-before-quiets ordering for free
//! from [`gambit_core::legal_moves`]. At the root, iterative deepening
//! re-sorts using the previous iteration's score
//! ([`super::Searcher::suggest_move`]), but before any iteration has
//! completed there's nothing to sort by — so the very first ordering
//! pass rates each root move by the one-ply material swing it produces,
//! from the mover's own perspective.

use gambit_core::{Color, Game, Move};

use crate::eval::material::material;

/// Sort `moves` in place, highest one-ply material delta first.
pub fn order_by_material_delta(game: &mut Game, moves: &mut [Move]) {
    let color = game.side_to_move();
    let before = material_for(game, color);

    let mut rated: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| {
            game.apply(mv);
            let after = material_for(game, color);
            game.undo(mv);
            (after - before, mv)
        })
        .collect();

    rated.sort_by(|a, b| b.0.cmp(&a.0));
    for (slot, (_, mv)) in moves.iter_mut().zip(rated) {
        *slot = mv;
    }
}

fn material_for(game: &Game, color: Color) -> i32 {
    let white_relative = material(game);
    if color == Color::White {
        white_relative
    } else {
        -white_relative
    }
}

/// Move `best` to the front of `moves`, if present. Used to re-seed the
/// next iterative-deepening pass with the previous pass's best move.
pub fn bubble_to_front(moves: &mut [Move], best: Move) {
    if let Some(pos) = moves.iter().position(|&m| m == best) {
        moves[..=pos].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::legal_moves;
    use gambit_core::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn capture_rated_above_quiet_development() {
        let mut game = Game::new();
        game.try_user_move(sq("e2"), sq("e4"), None).unwrap();
        game.try_user_move(sq("d7"), sq("d5"), None).unwrap();

        let mut moves = legal_moves(&mut game, game.side_to_move());
        order_by_material_delta(&mut game, &mut moves);
        assert!(moves[0].is_capture());
    }

    #[test]
    fn bubble_to_front_moves_target_move_first() {
        let mut game = Game::new();
        let mut moves = legal_moves(&mut game, Color::White);
        let target = moves[5];
        bubble_to_front(&mut moves, target);
        assert_eq!(moves[0], target);
    }
}
