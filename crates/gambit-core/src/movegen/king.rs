//! King steps and castling.
//!
//! Castling here only checks that neither king nor rook has moved and
//! that the squares between them are empty — it does not check whether
//! the king passes through or lands on an attacked square. That check
//! belongs to the legality filter in [`super::legal_moves`], since it
//! needs the same "does this leave my king attacked" machinery used for
//! every other move.

use crate::chess_move::Move;
use crate::color::Color;
use crate::game::Game;
use crate::piece::PieceHandle;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1),
    (-1, 0), (-1, -1), (0, -1), (1, -1),
];

pub(super) fn generate(game: &Game, color: Color, handle: PieceHandle, out: &mut Vec<Move>) {
    let piece = game.piece(handle);
    let from = piece.square();

    for &(dx, dy) in &KING_OFFSETS {
        let Some(to) = from.offset(dx, dy) else { continue };
        match game.piece_at(to) {
            None => out.push(Move::new(from, to, handle, None, None, piece.has_moved, game.last_double_push())),
            Some(target) if target.is_live && target.color != color => {
                let captured = game.board().at(to);
                out.push(Move::new(from, to, handle, captured, None, piece.has_moved, game.last_double_push()));
            }
            Some(_) => {}
        }
    }

    generate_castles(game, color, handle, from, out);
}

fn generate_castles(game: &Game, color: Color, handle: PieceHandle, from: Square, out: &mut Vec<Move>) {
    let piece = game.piece(handle);
    if piece.has_moved {
        return;
    }
    let back_rank = color.back_rank();
    if from != Square::new_unchecked(4, back_rank) {
        return;
    }

    try_castle(game, color, handle, from, back_rank, 7, &[5, 6], 6, out);
    try_castle(game, color, handle, from, back_rank, 0, &[1, 2, 3], 2, out);
}

#[allow(clippy::too_many_arguments)]
fn try_castle(
    game: &Game,
    color: Color,
    handle: PieceHandle,
    from: Square,
    rank: u8,
    rook_file: u8,
    must_be_empty: &[u8],
    king_dest_file: u8,
    out: &mut Vec<Move>,
) {
    let rook_square = Square::new_unchecked(rook_file, rank);
    let Some(rook_handle) = game.board().at(rook_square) else { return };
    let rook = game.piece(rook_handle);
    if rook.kind != PieceKind::Rook || rook.color != color || rook.has_moved || !rook.is_live {
        return;
    }
    if must_be_empty.iter().any(|&file| game.piece_at(Square::new_unchecked(file, rank)).is_some()) {
        return;
    }

    let to = Square::new_unchecked(king_dest_file, rank);
    out.push(Move::new(from, to, handle, None, None, false, game.last_double_push()));
}
