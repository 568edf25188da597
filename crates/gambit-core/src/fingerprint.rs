//! A canonical, hashable encoding of a position: equal fingerprints iff
//! the positions are equivalent under the rules (same occupancy, side
//! to move, castling rights, and en passant target).

use crate::color::Color;
use crate::game::Game;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// 64 squares at 4 bits each (color bit + 1-indexed kind, 0 = empty),
/// packed two per byte, plus side to move / castling rights / en
/// passant target folded into a trailing `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    board: [u8; 32],
    meta: u16,
}

const WHITE_KINGSIDE_BIT: u16 = 1 << 0;
const WHITE_QUEENSIDE_BIT: u16 = 1 << 1;
const BLACK_KINGSIDE_BIT: u16 = 1 << 2;
const BLACK_QUEENSIDE_BIT: u16 = 1 << 3;
const BLACK_TO_MOVE_BIT: u16 = 1 << 4;
/// En passant file occupies bits 5-8 (four bits: a file index 0-7, or
/// the sentinel `8` for "no en passant target" — a 3-bit field can't
/// hold both the full file range and a distinct "none" value).
const NO_EP_FILE: u16 = 8;

pub fn fingerprint_of(game: &Game) -> Fingerprint {
    let mut board = [0u8; 32];
    for (i, square) in Square::all().enumerate() {
        let nibble = match game.board().at(square) {
            None => 0u8,
            Some(handle) => {
                let piece = game.piece(handle);
                let color_bit = match piece.color {
                    Color::White => 0u8,
                    Color::Black => 0x8,
                };
                color_bit | (piece.kind.index() as u8 + 1)
            }
        };
        if i % 2 == 0 {
            board[i / 2] = nibble;
        } else {
            board[i / 2] |= nibble << 4;
        }
    }

    let mut meta = 0u16;
    if castling_available(game, Color::White, true) {
        meta |= WHITE_KINGSIDE_BIT;
    }
    if castling_available(game, Color::White, false) {
        meta |= WHITE_QUEENSIDE_BIT;
    }
    if castling_available(game, Color::Black, true) {
        meta |= BLACK_KINGSIDE_BIT;
    }
    if castling_available(game, Color::Black, false) {
        meta |= BLACK_QUEENSIDE_BIT;
    }
    if game.side_to_move() == Color::Black {
        meta |= BLACK_TO_MOVE_BIT;
    }
    let ep_file = game
        .last_double_push()
        .map(|h| game.piece(h).square().file() as u16)
        .unwrap_or(NO_EP_FILE);
    meta |= ep_file << 5;

    Fingerprint { board, meta }
}

fn castling_available(game: &Game, color: Color, kingside: bool) -> bool {
    let king = game.player(color).king();
    if king.has_moved {
        return false;
    }
    let rook_file = if kingside { 7 } else { 0 };
    let rook_square = Square::new_unchecked(rook_file, color.back_rank());
    match game.board().at(rook_square) {
        Some(handle) => {
            let rook = game.piece(handle);
            rook.kind == PieceKind::Rook && rook.is_live && !rook.has_moved
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_kind::PieceKind;
    use crate::test_util::Fixture;

    #[test]
    fn starting_position_has_full_castling_rights() {
        let game = Game::new();
        let fp = fingerprint_of(&game);
        assert_eq!(
            fp.meta & (WHITE_KINGSIDE_BIT | WHITE_QUEENSIDE_BIT | BLACK_KINGSIDE_BIT | BLACK_QUEENSIDE_BIT),
            WHITE_KINGSIDE_BIT | WHITE_QUEENSIDE_BIT | BLACK_KINGSIDE_BIT | BLACK_QUEENSIDE_BIT
        );
        assert_eq!(fp.meta & BLACK_TO_MOVE_BIT, 0);
    }

    #[test]
    fn identical_positions_fingerprint_equal() {
        let a = Game::new();
        let b = Game::new();
        assert_eq!(fingerprint_of(&a), fingerprint_of(&b));
    }

    #[test]
    fn moved_rook_loses_castling_right() {
        let mut fx = Fixture::empty();
        fx.place(Color::White, PieceKind::King, "e1", false);
        fx.place(Color::White, PieceKind::Rook, "h1", true);
        fx.place(Color::Black, PieceKind::King, "e8", false);
        let game = fx.build(Color::White);

        let fp = fingerprint_of(&game);
        assert_eq!(fp.meta & WHITE_KINGSIDE_BIT, 0);
    }

    #[test]
    fn en_passant_file_distinguishes_positions() {
        let mut fx = Fixture::empty();
        let pawn_a = fx.place(Color::White, PieceKind::Pawn, "e5", true);
        fx.place(Color::White, PieceKind::King, "a1", false);
        fx.place(Color::Black, PieceKind::King, "a8", false);
        fx.set_last_double_push(Some(pawn_a));
        let with_ep = fx.build(Color::White);

        let mut fx2 = Fixture::empty();
        fx2.place(Color::White, PieceKind::Pawn, "e5", true);
        fx2.place(Color::White, PieceKind::King, "a1", false);
        fx2.place(Color::Black, PieceKind::King, "a8", false);
        let without_ep = fx2.build(Color::White);

        assert_ne!(fingerprint_of(&with_ep), fingerprint_of(&without_ep));
    }
}
