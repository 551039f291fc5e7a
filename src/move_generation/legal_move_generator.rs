//! Full legal move generation pipeline.
//!
//! Collects captures for every piece of the side to move first; if any
//! capture exists anywhere on the board only captures are legal. Otherwise
//! every simple step is returned. Order is row-major by piece, then the
//! piece's direction order, and search tie-breaking depends on it.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_apply::apply_move_with_promotion;
use crate::move_generation::piece_moves::{possible_moves, push_capture_moves};

/// A legal move paired with the board it produces (promotion applied).
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub board_after: Board,
    pub captured: Option<Piece>,
}

/// Every capture available to `side`, ignoring whether simple moves exist.
pub fn capture_moves_for_side(board: &Board, side: Color) -> Vec<Move> {
    let mut captures = Vec::new();
    for piece in board.pieces_of(side) {
        push_capture_moves(board, &piece, &mut captures);
    }
    captures
}

/// Legal moves for `side` under the mandatory-capture rule. An empty result
/// means `side` cannot move.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let captures = capture_moves_for_side(board, side);
    if !captures.is_empty() {
        return captures;
    }

    let mut moves = Vec::with_capacity(16);
    for piece in board.pieces_of(side) {
        moves.extend(possible_moves(board, &piece));
    }
    moves
}

/// Cheaper than `!legal_moves(..).is_empty()`: stops at the first piece with
/// any step or jump.
pub fn has_legal_moves(board: &Board, side: Color) -> bool {
    board
        .pieces_of(side)
        .any(|piece| !possible_moves(board, &piece).is_empty())
}

/// Legal moves with their resulting positions, in generation order.
pub fn legal_moves_with_positions(board: &Board, side: Color) -> Vec<GeneratedMove> {
    legal_moves(board, side)
        .into_iter()
        .map(|mv| {
            let (board_after, captured) = apply_move_with_promotion(board, mv, side);
            GeneratedMove {
                mv,
                board_after,
                captured,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_text::parse_board;

    #[test]
    fn opening_position_has_seven_moves_and_no_captures() {
        let board = Board::new_game();
        for side in [Color::Light, Color::Dark] {
            let moves = legal_moves(&board, side);
            assert_eq!(moves.len(), 7);
            assert!(moves.iter().all(|m| !m.is_jump()));
            assert!(capture_moves_for_side(&board, side).is_empty());
        }
    }

    #[test]
    fn forced_capture_excludes_all_simple_moves() {
        // One light man can jump; three others have free steps.
        let board = parse_board(
            "\
........
........
........
....x...
...o....
o.....o.
.......o
........",
        )
        .expect("diagram should parse");

        let moves = legal_moves(&board, Color::Light);
        assert_eq!(
            moves,
            vec![Move::new(Square::new(4, 3), Square::new(2, 5))]
        );
    }

    #[test]
    fn mandatory_capture_returns_every_capture_on_the_board() {
        let board = parse_board(
            "\
........
........
..x.x...
...o....
........
..x.....
.o......
........",
        )
        .expect("diagram should parse");

        let moves = legal_moves(&board, Color::Light);
        let expected: usize = board
            .pieces_of(Color::Light)
            .map(|p| crate::move_generation::piece_moves::capture_moves(&board, &p).len())
            .sum();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves.len(), expected);
        assert!(moves.iter().all(Move::is_jump));
    }

    #[test]
    fn promoted_piece_gains_backward_moves() {
        let mut board = Board::new_empty();
        board.set_piece(1, 2, Some(Piece::man(Color::Light, 1, 2)));
        board.set_piece(6, 5, Some(Piece::man(Color::Dark, 6, 5)));

        let (after, _) = apply_move_with_promotion(
            &board,
            Move::new(Square::new(1, 2), Square::new(0, 1)),
            Color::Light,
        );
        let crowned = after.get_piece(0, 1).expect("piece landed");
        assert!(crowned.is_king());

        let moves = legal_moves(&after, Color::Light);
        assert!(moves.contains(&Move::new(Square::new(0, 1), Square::new(1, 0))));
        assert!(moves.contains(&Move::new(Square::new(0, 1), Square::new(1, 2))));
    }

    #[test]
    fn has_legal_moves_agrees_with_legal_moves() {
        let blocked = parse_board(
            "\
........
........
........
........
........
..x.....
.x......
o.......",
        )
        .expect("diagram should parse");
        // Light man on (7,0) faces (6,1) and its jump landing (5,2) is occupied.
        assert!(!has_legal_moves(&blocked, Color::Light));
        assert!(legal_moves(&blocked, Color::Light).is_empty());
        assert!(has_legal_moves(&blocked, Color::Dark));
        assert!(has_legal_moves(&Board::new_game(), Color::Dark));
    }

    #[test]
    fn generated_positions_apply_the_move() {
        let board = Board::new_game();
        for generated in legal_moves_with_positions(&board, Color::Light) {
            assert!(generated.board_after.piece_at(generated.mv.to).is_some());
            assert!(generated.board_after.piece_at(generated.mv.from).is_none());
            assert!(generated.captured.is_none());
        }
    }
}
