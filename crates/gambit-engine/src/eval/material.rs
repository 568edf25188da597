//! Material balance evaluation.

use gambit_core::{Color, Game, PieceKind};

/// Per-kind material weight, indexed by [`PieceKind::index()`].
///
/// The base weights {PAWN=1, KNIGHT=3, BISHOP=3, ROOK=5, QUEEN=9,
/// KING=0} scaled by 100, so that positional bonuses (single digits to
/// low tens per piece) stay at least an order of magnitude smaller than
/// the smallest non-zero material weight.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [100, 300, 300, 500, 900, 0];

/// Material balance from White's perspective: positive means White has
/// more material.
pub fn material(game: &Game) -> i32 {
    let mut score = 0i32;
    for color in Color::ALL {
        let sign = if color == Color::White { 1 } else { -1 };
        for (_, piece) in game.player(color).live_pieces() {
            score += sign * MATERIAL_VALUE[piece.kind.index()];
        }
    }
    score
}
