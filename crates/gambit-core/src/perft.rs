//! Node-count enumeration, used to cross-check the move generator
//! against known-good counts for standard test positions.

use crate::color::Color;
use crate::game::Game;
use crate::movegen::legal_moves;

/// Count leaf positions reachable in exactly `depth` plies.
pub fn perft(game: &mut Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let color = game.side_to_move();
    let moves = legal_moves(game, color);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut total = 0u64;
    for mv in moves {
        game.apply(mv);
        total += perft(game, depth - 1);
        game.undo(mv);
    }
    total
}

/// Per-root-move node counts at `depth - 1`, for diagnosing a
/// divergence from a known-good perft count one ply at a time.
pub fn divide(game: &mut Game, depth: u32) -> Vec<(crate::chess_move::Move, u64)> {
    let color = game.side_to_move();
    let moves = legal_moves(game, color);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        game.apply(mv);
        let count = if depth <= 1 { 1 } else { perft(game, depth - 1) };
        game.undo(mv);
        out.push((mv, count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_kind::PieceKind;
    use crate::test_util::Fixture;

    #[test]
    fn starting_position_perft_depths_one_through_four() {
        let mut game = Game::new();
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8_902);
        assert_eq!(perft(&mut game, 4), 197_281);
    }

    #[test]
    #[ignore = "several seconds; run explicitly"]
    fn starting_position_perft_depth_five() {
        let mut game = Game::new();
        assert_eq!(perft(&mut game, 5), 4_865_609);
    }

    /// The position equivalent to the standard "kiwipete"-class perft
    /// fixture, reached from the initial position by: black king e8-f8;
    /// black bishop f8-e7; black pawn e7-e6; black pawns d7 and f7
    /// removed; white bishop f1-c4; white knight g1-e2; white pawn
    /// d2-d7; white pawns e2 and f2 removed.
    fn kiwipete_like() -> Game {
        let mut fx = Fixture::empty();
        fx.place(Color::White, PieceKind::Rook, "a1", false);
        fx.place(Color::White, PieceKind::Knight, "b1", false);
        fx.place(Color::White, PieceKind::Bishop, "c1", false);
        fx.place(Color::White, PieceKind::Queen, "d1", false);
        fx.place(Color::White, PieceKind::King, "e1", false);
        fx.place(Color::White, PieceKind::Rook, "h1", false);
        fx.place(Color::White, PieceKind::Pawn, "a2", false);
        fx.place(Color::White, PieceKind::Pawn, "b2", false);
        fx.place(Color::White, PieceKind::Pawn, "c2", false);
        fx.place(Color::White, PieceKind::Knight, "e2", true);
        fx.place(Color::White, PieceKind::Pawn, "g2", false);
        fx.place(Color::White, PieceKind::Pawn, "h2", false);
        fx.place(Color::White, PieceKind::Bishop, "c4", true);
        fx.place(Color::White, PieceKind::Pawn, "d7", true);

        fx.place(Color::Black, PieceKind::Rook, "a8", false);
        fx.place(Color::Black, PieceKind::Knight, "b8", false);
        fx.place(Color::Black, PieceKind::Bishop, "c8", false);
        fx.place(Color::Black, PieceKind::Queen, "d8", false);
        fx.place(Color::Black, PieceKind::King, "f8", true);
        fx.place(Color::Black, PieceKind::Knight, "g8", false);
        fx.place(Color::Black, PieceKind::Rook, "h8", false);
        fx.place(Color::Black, PieceKind::Pawn, "a7", false);
        fx.place(Color::Black, PieceKind::Pawn, "b7", false);
        fx.place(Color::Black, PieceKind::Pawn, "c7", false);
        fx.place(Color::Black, PieceKind::Bishop, "e7", true);
        fx.place(Color::Black, PieceKind::Pawn, "e6", true);
        fx.place(Color::Black, PieceKind::Pawn, "g7", false);
        fx.place(Color::Black, PieceKind::Pawn, "h7", false);

        fx.build(Color::White)
    }

    #[test]
    fn kiwipete_like_position_perft_depth_one() {
        let mut game = kiwipete_like();
        assert_eq!(perft(&mut game, 1), 44);
    }

    #[test]
    #[ignore = "slow; run explicitly to validate deep move generation"]
    fn kiwipete_like_position_perft_depths_two_through_five() {
        let mut game = kiwipete_like();
        assert_eq!(perft(&mut game, 2), 1_486);
        assert_eq!(perft(&mut game, 3), 62_379);
        assert_eq!(perft(&mut game, 4), 2_103_487);
        assert_eq!(perft(&mut game, 5), 89_941_194);
    }
}
