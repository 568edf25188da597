//! Pawn pushes, captures, en passant, and promotion.

use crate::chess_move::Move;
use crate::color::Color;
use crate::game::Game;
use crate::piece::PieceHandle;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(super) fn generate(game: &Game, color: Color, handle: PieceHandle, out: &mut Vec<Move>) {
    let piece = game.piece(handle);
    let from = piece.square();
    let dir = color.pawn_direction();
    let promo_rank = color.promotion_rank();

    if let Some(one) = from.offset(0, dir) {
        if game.piece_at(one).is_none() {
            push(game, from, one, handle, promo_rank, out);

            if !piece.has_moved {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if game.piece_at(two).is_none() {
                        out.push(Move::new(from, two, handle, None, None, piece.has_moved, game.last_double_push()));
                    }
                }
            }
        }
    }

    for dx in [-1i8, 1i8] {
        if let Some(to) = from.offset(dx, dir) {
            if let Some(target) = game.piece_at(to) {
                if target.is_live && target.color != color {
                    let captured = game.board().at(to);
                    capture(game, from, to, handle, captured, promo_rank, out);
                }
            } else if let Some(ep) = en_passant_target(game, color, from, to) {
                out.push(Move::new(from, to, handle, Some(ep), None, piece.has_moved, game.last_double_push()));
            }
        }
    }
}

fn push(game: &Game, from: Square, to: Square, handle: PieceHandle, promo_rank: u8, out: &mut Vec<Move>) {
    let piece = game.piece(handle);
    if to.rank() == promo_rank {
        for &kind in &PieceKind::PROMOTIONS {
            out.push(Move::new(from, to, handle, None, Some(kind), piece.has_moved, game.last_double_push()));
        }
    } else {
        out.push(Move::new(from, to, handle, None, None, piece.has_moved, game.last_double_push()));
    }
}

fn capture(
    game: &Game,
    from: Square,
    to: Square,
    handle: PieceHandle,
    captured: Option<PieceHandle>,
    promo_rank: u8,
    out: &mut Vec<Move>,
) {
    let piece = game.piece(handle);
    if to.rank() == promo_rank {
        for &kind in &PieceKind::PROMOTIONS {
            out.push(Move::new(from, to, handle, captured, Some(kind), piece.has_moved, game.last_double_push()));
        }
    } else {
        out.push(Move::new(from, to, handle, captured, None, piece.has_moved, game.last_double_push()));
    }
}

/// If `to` is empty but capturable en passant from `from`, return the
/// handle of the pawn that would be captured.
fn en_passant_target(game: &Game, color: Color, from: Square, to: Square) -> Option<PieceHandle> {
    let passed = game.last_double_push()?;
    let passed_piece = game.piece(passed);
    if passed_piece.color == color {
        return None;
    }
    let passed_square = passed_piece.square();
    if passed_square.rank() != from.rank() {
        return None;
    }
    if passed_square.file() != to.file() {
        return None;
    }
    // `to` must be the square directly behind the passed pawn, from the
    // capturing pawn's point of view.
    let behind = passed_square.offset(0, color.pawn_direction())?;
    if behind == to {
        Some(passed)
    } else {
        None
    }
}
