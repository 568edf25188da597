//! The complete mutable game state.

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceHandle};
use crate::player::Player;
use crate::square::Square;

/// A chess game in progress: the board, both rosters, whose turn it is,
/// and the one piece of history needed for en passant.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    side_to_move: Color,
    /// The pawn that just advanced two squares on the immediately
    /// preceding ply, if any. The sole state en-passant eligibility
    /// needs beyond the board itself.
    last_double_push: Option<PieceHandle>,
}

impl Game {
    /// Build a game at the standard starting position, White to move.
    pub fn new() -> Game {
        let white = Player::starting(Color::White);
        let black = Player::starting(Color::Black);
        let mut board = Board::empty();
        for (index, piece) in white.pieces().iter().enumerate() {
            board.set(piece.square(), Some(PieceHandle::new(Color::White, index as u8)));
        }
        for (index, piece) in black.pieces().iter().enumerate() {
            board.set(piece.square(), Some(PieceHandle::new(Color::Black, index as u8)));
        }
        Game {
            board,
            white,
            black,
            side_to_move: Color::White,
            last_double_push: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    pub(crate) fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Resolve a handle to the piece it names.
    #[inline]
    pub fn piece(&self, handle: PieceHandle) -> &Piece {
        self.player(handle.color).piece(handle.index)
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, handle: PieceHandle) -> &mut Piece {
        self.player_mut(handle.color).piece_mut(handle.index)
    }

    /// Return the occupant of `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.at(square).map(|h| self.piece(h))
    }

    #[inline]
    pub fn last_double_push(&self) -> Option<PieceHandle> {
        self.last_double_push
    }

    #[inline]
    pub(crate) fn set_last_double_push(&mut self, handle: Option<PieceHandle>) {
        self.last_double_push = handle;
    }

    /// Return the handle for `color`'s king.
    #[inline]
    pub fn king_handle(&self, color: Color) -> PieceHandle {
        PieceHandle::new(color, self.player(color).king_index())
    }

    /// Assemble a game from pre-built rosters, deriving the board from
    /// each roster's live pieces. Used by test fixtures for positions
    /// other than the standard start.
    #[cfg(test)]
    pub(crate) fn assemble(
        white: Player,
        black: Player,
        side_to_move: Color,
        last_double_push: Option<PieceHandle>,
    ) -> Game {
        let mut board = Board::empty();
        for color in Color::ALL {
            let roster = match color {
                Color::White => &white,
                Color::Black => &black,
            };
            for (index, piece) in roster.live_pieces() {
                board.set(piece.square(), Some(PieceHandle::new(color, index)));
            }
        }
        Game {
            board,
            white,
            black,
            side_to_move,
            last_double_push,
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
