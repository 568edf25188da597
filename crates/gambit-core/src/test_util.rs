//! In-process position construction for tests.
//!
//! Parsing FEN is out of scope, so fixtures are built by placing pieces
//! directly, the way `original_source` tests build positions with
//! explicit setup calls rather than a FEN string.

#![cfg(test)]

use crate::color::Color;
use crate::game::Game;
use crate::piece::{Piece, PieceHandle};
use crate::piece_kind::PieceKind;
use crate::player::{Player, ROSTER_SIZE};
use crate::square::Square;

pub(crate) struct Fixture {
    white: Vec<Piece>,
    black: Vec<Piece>,
    white_king: Option<u8>,
    black_king: Option<u8>,
    last_double_push: Option<PieceHandle>,
}

impl Fixture {
    pub(crate) fn empty() -> Fixture {
        Fixture {
            white: Vec::new(),
            black: Vec::new(),
            white_king: None,
            black_king: None,
            last_double_push: None,
        }
    }

    /// Place a piece on `square` (algebraic, e.g. `"e4"`), returning its
    /// handle. Placing a `King` records it as that side's king.
    pub(crate) fn place(&mut self, color: Color, kind: PieceKind, square: &str, has_moved: bool) -> PieceHandle {
        let sq = Square::from_algebraic(square).expect("valid square");
        let mut piece = Piece::new(color, kind, sq);
        piece.has_moved = has_moved;

        let (roster, king_slot) = match color {
            Color::White => (&mut self.white, &mut self.white_king),
            Color::Black => (&mut self.black, &mut self.black_king),
        };
        let index = roster.len() as u8;
        if kind == PieceKind::King {
            *king_slot = Some(index);
        }
        roster.push(piece);
        PieceHandle::new(color, index)
    }

    pub(crate) fn set_last_double_push(&mut self, handle: Option<PieceHandle>) {
        self.last_double_push = handle;
    }

    pub(crate) fn build(self, side_to_move: Color) -> Game {
        let white = Self::finish_roster(Color::White, self.white, self.white_king.expect("white king placed"));
        let black = Self::finish_roster(Color::Black, self.black, self.black_king.expect("black king placed"));
        Game::assemble(white, black, side_to_move, self.last_double_push)
    }

    fn finish_roster(color: Color, mut pieces: Vec<Piece>, king_index: u8) -> Player {
        while pieces.len() < ROSTER_SIZE {
            let mut filler = Piece::new(color, PieceKind::Pawn, Square::new_unchecked(0, 0));
            filler.is_live = false;
            pieces.push(filler);
        }
        let array: [Piece; ROSTER_SIZE] = pieces.try_into().expect("exactly ROSTER_SIZE pieces");
        Player::from_pieces(color, array, king_index)
    }
}
