//! Move generation: pseudo-legal candidates, then a legality filter.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::{is_attacked, is_check};
use crate::chess_move::Move;
use crate::color::Color;
use crate::game::Game;
use crate::piece::PieceHandle;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Every move `color`'s pieces could make, ignoring whether it leaves
/// its own king in check.
pub fn pseudo_legal_moves(game: &Game, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (index, piece) in game.player(color).live_pieces() {
        let handle = PieceHandle::new(color, index);
        match piece.kind {
            PieceKind::Pawn => pawns::generate(game, color, handle, &mut moves),
            PieceKind::Knight => knights::generate(game, color, handle, &mut moves),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliders::generate(game, color, handle, &mut moves)
            }
            PieceKind::King => king::generate(game, color, handle, &mut moves),
        }
    }
    moves
}

/// Every legal move available to `color`: pseudo-legal moves that don't
/// leave that color's own king in check, with castling additionally
/// vetted for an attacked origin or transit square. Captures sort
/// before quiet moves.
pub fn legal_moves(game: &mut Game, color: Color) -> Vec<Move> {
    let candidates = pseudo_legal_moves(game, color);
    let mut legal = Vec::with_capacity(candidates.len());

    for mv in candidates {
        let mover_kind = game.piece(mv.mover).kind;
        if mv.is_castle(mover_kind) && !castle_path_is_safe(game, color, &mv) {
            continue;
        }

        game.apply(mv);
        let leaves_king_in_check = is_check(game, color);
        game.undo(mv);

        if !leaves_king_in_check {
            legal.push(mv);
        }
    }

    legal.sort_by_key(|mv| !mv.is_capture());
    legal
}

/// Castling additionally requires that the king isn't currently in
/// check and doesn't pass through an attacked square — the move
/// generator itself only checks that the path is empty and that
/// neither king nor rook has moved.
fn castle_path_is_safe(game: &Game, color: Color, mv: &Move) -> bool {
    if is_attacked(game, mv.from, !color) {
        return false;
    }
    let step: i8 = if mv.to.file() > mv.from.file() { 1 } else { -1 };
    let transit = Square::new_unchecked((mv.from.file() as i8 + step) as u8, mv.from.rank());
    !is_attacked(game, transit, !color)
}
