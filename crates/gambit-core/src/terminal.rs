//! Checkmate, stalemate, and in-progress detection.

use crate::attacks::is_check;
use crate::color::Color;
use crate::game::Game;
use crate::movegen::legal_moves;

/// The result of a position from one color's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// `color` has at least one legal move.
    InPlay,
    /// `color` has no legal move and is in check: checkmate.
    Loss,
    /// `color` has no legal move and is not in check: stalemate.
    Draw,
}

/// Classify the position from `color`'s point of view.
pub fn state_of(game: &mut Game, color: Color) -> GameState {
    if !legal_moves(game, color).is_empty() {
        return GameState::InPlay;
    }
    if is_check(game, color) {
        GameState::Loss
    } else {
        GameState::Draw
    }
}
