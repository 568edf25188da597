//! Applying and undoing moves in place.
//!
//! No copy-make: a move mutates the live `Game` directly, and `undo`
//! reverses exactly those mutations using the history carried in the
//! `Move` record. Pieces never change roster slot; capture only flips
//! `is_live`.

use crate::chess_move::Move;
use crate::game::Game;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Game {
    /// Apply `mv` to the current position. Assumes `mv` was produced by
    /// the move generator for the side currently on move; does not
    /// re-validate legality.
    pub fn apply(&mut self, mv: Move) {
        let mover_color = mv.mover.color;
        let mover_kind = self.piece(mv.mover).kind;

        if let Some(captured) = mv.captured {
            let captured_square = self.piece(captured).square();
            self.board_mut().set(captured_square, None);
            self.piece_mut(captured).is_live = false;
        }

        self.board_mut().set(mv.from, None);
        {
            let mover = self.piece_mut(mv.mover);
            mover.has_moved = true;
            if let Some(promotion) = mv.promotion {
                mover.kind = promotion;
            }
            mover.place_at(mv.to);
        }
        self.board_mut().set(mv.to, Some(mv.mover));

        if mv.is_castle(mover_kind) {
            let (rook_from_file, rook_to_file) = castle_rook_files(mv.to.file());
            let rank = mv.to.rank();
            let rook_from = Square::new_unchecked(rook_from_file, rank);
            let rook_to = Square::new_unchecked(rook_to_file, rank);
            let rook_handle = self.board().at(rook_from).expect("castling rook present");
            self.board_mut().set(rook_from, None);
            {
                let rook = self.piece_mut(rook_handle);
                rook.has_moved = true;
                rook.place_at(rook_to);
            }
            self.board_mut().set(rook_to, Some(rook_handle));
        }

        let is_double_push = mover_kind == PieceKind::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        self.set_last_double_push(if is_double_push { Some(mv.mover) } else { None });
        self.set_side_to_move(!mover_color);
    }

    /// Reverse `mv`, restoring the position to exactly what it was
    /// before `apply`.
    pub fn undo(&mut self, mv: Move) {
        let mover_color = mv.mover.color;
        self.set_side_to_move(mover_color);
        self.set_last_double_push(mv.prev_last_double_push);

        let mover_kind_for_castle_check = self.piece(mv.mover).kind;
        if mv.is_castle(mover_kind_for_castle_check) {
            let (rook_from_file, rook_to_file) = castle_rook_files(mv.to.file());
            let rank = mv.to.rank();
            let rook_from = Square::new_unchecked(rook_from_file, rank);
            let rook_to = Square::new_unchecked(rook_to_file, rank);
            let rook_handle = self.board().at(rook_to).expect("castled rook present");
            self.board_mut().set(rook_to, None);
            {
                let rook = self.piece_mut(rook_handle);
                rook.has_moved = false;
                rook.place_at(rook_from);
            }
            self.board_mut().set(rook_from, Some(rook_handle));
        }

        self.board_mut().set(mv.to, None);
        {
            let mover = self.piece_mut(mv.mover);
            if mv.promotion.is_some() {
                mover.kind = PieceKind::Pawn;
            }
            mover.place_at(mv.from);
            mover.has_moved = mv.prev_has_moved;
        }
        self.board_mut().set(mv.from, Some(mv.mover));

        if let Some(captured) = mv.captured {
            self.piece_mut(captured).is_live = true;
            let captured_square = self.piece(captured).square();
            self.board_mut().set(captured_square, Some(captured));
        }
    }
}

/// Map the king's destination file to the castling rook's (origin,
/// destination) file.
fn castle_rook_files(king_dest_file: u8) -> (u8, u8) {
    if king_dest_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece::PieceHandle;
    use crate::piece_kind::PieceKind;
    use crate::test_util::Fixture;

    #[test]
    fn apply_and_undo_simple_push_restores_position() {
        let mut game = Game::new();
        let handle = PieceHandle::new(Color::White, 12);
        let from = Square::from_algebraic("e2").unwrap();
        let to = Square::from_algebraic("e4").unwrap();
        let mv = crate::chess_move::Move::new(from, to, handle, None, None, false, None);

        game.apply(mv);
        assert_eq!(game.piece(handle).square(), to);
        assert!(game.piece(handle).has_moved);
        assert_eq!(game.side_to_move(), Color::Black);

        game.undo(mv);
        assert_eq!(game.piece(handle).square(), from);
        assert!(!game.piece(handle).has_moved);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board().at(from), Some(handle));
        assert_eq!(game.board().at(to), None);
    }

    #[test]
    fn en_passant_undo_restores_captured_pawn_off_destination_square() {
        let mut fx = Fixture::empty();
        let white_pawn = fx.place(Color::White, PieceKind::Pawn, "e5", true);
        let black_pawn = fx.place(Color::Black, PieceKind::Pawn, "d5", true);
        fx.place(Color::White, PieceKind::King, "e1", false);
        fx.place(Color::Black, PieceKind::King, "e8", false);
        fx.set_last_double_push(Some(black_pawn));
        let mut game = fx.build(Color::White);

        let from = Square::from_algebraic("e5").unwrap();
        let to = Square::from_algebraic("d6").unwrap();
        let mv = crate::chess_move::Move::new(from, to, white_pawn, Some(black_pawn), None, true, Some(black_pawn));

        game.apply(mv);
        assert!(!game.piece(black_pawn).is_live);
        assert_eq!(game.board().at(Square::from_algebraic("d5").unwrap()), None);

        game.undo(mv);
        assert!(game.piece(black_pawn).is_live);
        assert_eq!(game.piece(black_pawn).square(), Square::from_algebraic("d5").unwrap());
        assert_eq!(game.board().at(Square::from_algebraic("d5").unwrap()), Some(black_pawn));
        assert_eq!(game.board().at(to), None);
    }

    #[test]
    fn castle_moves_rook_and_undo_restores_it() {
        let mut fx = Fixture::empty();
        let king = fx.place(Color::White, PieceKind::King, "e1", false);
        let rook = fx.place(Color::White, PieceKind::Rook, "h1", false);
        fx.place(Color::Black, PieceKind::King, "e8", false);
        let mut game = fx.build(Color::White);

        let from = Square::from_algebraic("e1").unwrap();
        let to = Square::from_algebraic("g1").unwrap();
        let mv = crate::chess_move::Move::new(from, to, king, None, None, false, None);

        game.apply(mv);
        assert_eq!(game.piece(king).square(), to);
        assert_eq!(game.piece(rook).square(), Square::from_algebraic("f1").unwrap());
        assert!(game.piece(rook).has_moved);

        game.undo(mv);
        assert_eq!(game.piece(king).square(), from);
        assert_eq!(game.piece(rook).square(), Square::from_algebraic("h1").unwrap());
        assert!(!game.piece(rook).has_moved);
    }

    #[test]
    fn promotion_undo_restores_pawn_kind() {
        let mut fx = Fixture::empty();
        let pawn = fx.place(Color::White, PieceKind::Pawn, "e7", true);
        fx.place(Color::White, PieceKind::King, "a1", false);
        fx.place(Color::Black, PieceKind::King, "a8", false);
        let mut game = fx.build(Color::White);

        let from = Square::from_algebraic("e7").unwrap();
        let to = Square::from_algebraic("e8").unwrap();
        let mv = crate::chess_move::Move::new(from, to, pawn, None, Some(PieceKind::Queen), true, None);

        game.apply(mv);
        assert_eq!(game.piece(pawn).kind, PieceKind::Queen);

        game.undo(mv);
        assert_eq!(game.piece(pawn).kind, PieceKind::Pawn);
    }
}
