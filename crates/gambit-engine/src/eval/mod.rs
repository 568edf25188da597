//! Static position evaluation.
//!
//! Both terms share one scale: material weights are pawn-value * 100
//! (see [`material::MATERIAL_VALUE`]), and positional bonuses are held
//! to single digits to low tens per piece, so the sum stays material-
//! dominated rather than positional-dominated.

pub mod material;
pub mod positional;

use gambit_core::{Color, Game};

use material::material;
use positional::positional;

/// Evaluate `game` from White's perspective: positive favors White.
pub fn evaluate(game: &Game) -> i32 {
    material(game) + positional(game)
}

/// Evaluate `game` from `side`'s perspective, as negamax expects.
pub fn evaluate_for(game: &Game, side: Color) -> i32 {
    let white_relative = evaluate(game);
    if side == Color::White {
        white_relative
    } else {
        -white_relative
    }
}
