//! Positional evaluation: a flat center-distance square bonus, the same
//! for every piece kind regardless of its material weight.

use gambit_core::{Color, Game, Square};

/// Per-file (and, by the same table, per-rank) centrality weight. Files
/// a/h and ranks 1/8 are worth the least, d/e and ranks 4/5 the most.
const CENTER_WEIGHT: [i32; 8] = [4, 4, 5, 6, 6, 5, 4, 4];

/// The combined file+rank weight ranges 8 (a corner) to 12 (the
/// center); subtracting this baseline centers a square's bonus on
/// zero instead of always being positive.
const CENTRALITY_BASELINE: i32 = 8;

/// Scale applied to the centered centrality offset (range 0-4). A
/// queen alone is worth 900 in [`super::material::MATERIAL_VALUE`]; the
/// smallest non-zero piece is worth 100. Capping a single square's
/// bonus at `4 * SCALE` keeps positional terms at least an order of
/// magnitude below that smallest material weight.
const SCALE: i32 = 2;

/// Positional balance from White's perspective.
pub fn positional(game: &Game) -> i32 {
    let mut score = 0i32;
    for color in Color::ALL {
        let sign = if color == Color::White { 1 } else { -1 };
        for (_, piece) in game.player(color).live_pieces() {
            score += sign * square_value(piece.square());
        }
    }
    score
}

fn square_value(square: Square) -> i32 {
    let centrality = CENTER_WEIGHT[square.file() as usize] + CENTER_WEIGHT[square.rank() as usize];
    (centrality - CENTRALITY_BASELINE) * SCALE
}
