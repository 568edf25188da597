//! Errors surfaced when a user (rather than the search) proposes a move.

use thiserror::Error;

use crate::chess_move::Move;
use crate::game::Game;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::square::Square;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("the piece on {0} belongs to the other side")]
    WrongColor(Square),
    #[error("{from} to {to} is not a legal move")]
    NoSuchMove { from: Square, to: Square },
    #[error("promotion choice required for {from} to {to}")]
    PromotionRequired { from: Square, to: Square },
    #[error("{from} to {to} would leave the king in check")]
    LeavesKingInCheck { from: Square, to: Square },
}

impl Game {
    /// Validate and apply a move requested by a human player, returning
    /// the applied [`Move`] so the caller can report it or undo it.
    pub fn try_user_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> Result<Move, MoveError> {
        let piece = self.piece_at(from).ok_or(MoveError::EmptySource(from))?;
        let color = self.side_to_move();
        if piece.color != color {
            return Err(MoveError::WrongColor(from));
        }

        let candidates: Vec<Move> = movegen::pseudo_legal_moves(self, color)
            .into_iter()
            .filter(|m| m.from == from && m.to == to)
            .collect();
        if candidates.is_empty() {
            return Err(MoveError::NoSuchMove { from, to });
        }

        let mv = if candidates.len() > 1 {
            let kind = promotion.ok_or(MoveError::PromotionRequired { from, to })?;
            candidates
                .into_iter()
                .find(|m| m.promotion == Some(kind))
                .ok_or(MoveError::NoSuchMove { from, to })?
        } else {
            candidates[0]
        };

        let legal = movegen::legal_moves(self, color);
        if !legal.contains(&mv) {
            return Err(MoveError::LeavesKingInCheck { from, to });
        }

        self.apply(mv);
        Ok(mv)
    }
}
