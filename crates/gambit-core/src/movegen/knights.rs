//! Knight moves.

use crate::chess_move::Move;
use crate::color::Color;
use crate::game::Game;
use crate::piece::PieceHandle;

const OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

pub(super) fn generate(game: &Game, color: Color, handle: PieceHandle, out: &mut Vec<Move>) {
    let piece = game.piece(handle);
    let from = piece.square();

    for &(dx, dy) in &OFFSETS {
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
}
