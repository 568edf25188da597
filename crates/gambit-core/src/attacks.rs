//! Square-attacked-by-color queries, independent of whose turn it is.

use crate::color::Color;
use crate::game::Game;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1),
    (-1, 0), (-1, -1), (0, -1), (1, -1),
];

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Is `square` attacked by any live piece of `by_color`?
///
/// Pure lookup: doesn't care whether `square` is occupied, by whom, or
/// whose turn it is. Used both for check detection and for vetting a
/// castling king's transit squares.
pub fn is_attacked(game: &Game, square: Square, by_color: Color) -> bool {
    if pawn_attacks(game, square, by_color) {
        return true;
    }
    if leaper_attacks(game, square, by_color, PieceKind::Knight, &KNIGHT_OFFSETS) {
        return true;
    }
    if leaper_attacks(game, square, by_color, PieceKind::King, &KING_OFFSETS) {
        return true;
    }
    if ray_attacks(game, square, by_color, &DIAGONAL_DIRS, PieceKind::Bishop) {
        return true;
    }
    if ray_attacks(game, square, by_color, &ORTHOGONAL_DIRS, PieceKind::Rook) {
        return true;
    }
    false
}

/// Is `color`'s king currently in check?
pub fn is_check(game: &Game, color: Color) -> bool {
    let king_square = game.player(color).king().square();
    is_attacked(game, king_square, !color)
}

fn pawn_attacks(game: &Game, square: Square, by_color: Color) -> bool {
    // A pawn of `by_color` attacks diagonally forward from its own
    // perspective, so we look one rank *behind* `square` in that
    // direction for the attacker.
    let behind = -by_color.pawn_direction();
    for dx in [-1i8, 1i8] {
        if let Some(origin) = square.offset(dx, behind) {
            if let Some(piece) = game.piece_at(origin) {
                if piece.is_live && piece.color == by_color && piece.kind == PieceKind::Pawn {
                    return true;
                }
            }
        }
    }
    false
}

fn leaper_attacks(
    game: &Game,
    square: Square,
    by_color: Color,
    kind: PieceKind,
    offsets: &[(i8, i8)],
) -> bool {
    for &(dx, dy) in offsets {
        if let Some(origin) = square.offset(dx, dy) {
            if let Some(piece) = game.piece_at(origin) {
                if piece.is_live && piece.color == by_color && piece.kind == kind {
                    return true;
                }
            }
        }
    }
    false
}

/// Walk each direction in `dirs` outward from `square` until hitting a
/// piece or the board edge. A hit counts if it's a live `by_color` piece
/// whose kind is `primary_kind` or `Queen`.
fn ray_attacks(
    game: &Game,
    square: Square,
    by_color: Color,
    dirs: &[(i8, i8)],
    primary_kind: PieceKind,
) -> bool {
    for &(dx, dy) in dirs {
        let mut current = square;
        loop {
            match current.offset(dx, dy) {
                None => break,
                Some(next) => {
                    current = next;
                    match game.piece_at(current) {
                        None => continue,
                        Some(piece) => {
                            if piece.is_live
                                && piece.color == by_color
                                && (piece.kind == primary_kind || piece.kind == PieceKind::Queen)
                            {
                                return true;
                            }
                            break;
                        }
                    }
                }
            }
        }
    }
    false
}
