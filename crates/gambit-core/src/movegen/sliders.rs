//! Bishop, rook, and queen ray moves.

use crate::chess_move::Move;
use crate::color::Color;
use crate::game::Game;
use crate::piece::PieceHandle;
use crate::piece_kind::PieceKind;

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(super) fn generate(game: &Game, color: Color, handle: PieceHandle, out: &mut Vec<Move>) {
    let kind = game.piece(handle).kind;
    match kind {
        PieceKind::Bishop => walk(game, color, handle, &DIAGONAL_DIRS, out),
        PieceKind::Rook => walk(game, color, handle, &ORTHOGONAL_DIRS, out),
        PieceKind::Queen => {
            walk(game, color, handle, &DIAGONAL_DIRS, out);
            walk(game, color, handle, &ORTHOGONAL_DIRS, out);
        }
        _ => {}
    }
}

fn walk(game: &Game, color: Color, handle: PieceHandle, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let piece = game.piece(handle);
    let from = piece.square();

    for &(dx, dy) in dirs {
        let mut current = from;
        loop {
            let Some(to) = current.offset(dx, dy) else { break };
            current = to;
            match game.piece_at(to) {
                None => {
                    out.push(Move::new(from, to, handle, None, None, piece.has_moved, game.last_double_push()));
                }
                Some(target) => {
                    if target.is_live && target.color != color {
                        let captured = game.board().at(to);
                        out.push(Move::new(from, to, handle, captured, None, piece.has_moved, game.last_double_push()));
                    }
                    break;
                }
            }
        }
    }
}
