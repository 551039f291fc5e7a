//! Per-piece step and jump enumeration.
//!
//! Both functions walk the same direction set from [`Piece::directions`], so
//! simple-move and capture generation cannot drift apart.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

/// All destinations for `piece`: a step onto an empty neighbour, or a jump
/// over an adjacent enemy onto an empty in-bounds landing square.
pub fn possible_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let from = piece.square();
    let mut out = Vec::with_capacity(4);

    for &(dr, dc) in piece.directions() {
        let step = from.offset(dr, dc);
        if !step.in_bounds() {
            continue;
        }
        match board.piece_at(step) {
            None => out.push(Move::new(from, step)),
            Some(target) if target.color != piece.color => {
                let landing = step.offset(dr, dc);
                if landing.in_bounds() && board.piece_at(landing).is_none() {
                    out.push(Move::new(from, landing));
                }
            }
            Some(_) => {}
        }
    }

    out
}

/// Only the jumping subset of [`possible_moves`].
pub fn capture_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let mut out = Vec::new();
    push_capture_moves(board, piece, &mut out);
    out
}

pub(crate) fn push_capture_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    let from = piece.square();

    for &(dr, dc) in piece.directions() {
        let victim_square = from.offset(dr, dc);
        let Some(victim) = board.piece_at(victim_square) else {
            continue;
        };
        if victim.color == piece.color {
            continue;
        }
        let landing = victim_square.offset(dr, dc);
        if landing.in_bounds() && board.piece_at(landing).is_none() {
            out.push(Move::new(from, landing));
        }
    }
}

#[inline]
pub fn can_capture(board: &Board, piece: &Piece) -> bool {
    !capture_moves(board, piece).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn light_man_steps_toward_row_zero() {
        let mut board = Board::new_empty();
        board.set_piece(5, 2, Some(Piece::man(Color::Light, 5, 2)));
        let piece = board.get_piece(5, 2).expect("piece");

        let moves = possible_moves(&board, &piece);
        assert_eq!(
            moves,
            vec![Move::new(sq(5, 2), sq(4, 1)), Move::new(sq(5, 2), sq(4, 3))]
        );
    }

    #[test]
    fn edge_man_has_one_step() {
        let mut board = Board::new_empty();
        board.set_piece(2, 7, Some(Piece::man(Color::Dark, 2, 7)));
        let piece = board.get_piece(2, 7).expect("piece");
        assert_eq!(possible_moves(&board, &piece), vec![Move::new(sq(2, 7), sq(3, 6))]);
    }

    #[test]
    fn king_moves_in_all_four_directions() {
        let mut board = Board::new_empty();
        board.set_piece(4, 3, Some(Piece::king(Color::Dark, 4, 3)));
        let piece = board.get_piece(4, 3).expect("piece");
        assert_eq!(possible_moves(&board, &piece).len(), 4);
    }

    #[test]
    fn jump_requires_empty_landing() {
        let mut board = Board::new_empty();
        board.set_piece(5, 2, Some(Piece::man(Color::Light, 5, 2)));
        board.set_piece(4, 3, Some(Piece::man(Color::Dark, 4, 3)));
        let piece = board.get_piece(5, 2).expect("piece");

        assert_eq!(capture_moves(&board, &piece), vec![Move::new(sq(5, 2), sq(3, 4))]);
        assert!(can_capture(&board, &piece));

        board.set_piece(3, 4, Some(Piece::man(Color::Dark, 3, 4)));
        assert!(capture_moves(&board, &piece).is_empty());
        // Blocked jump leaves only the other step.
        assert_eq!(possible_moves(&board, &piece), vec![Move::new(sq(5, 2), sq(4, 1))]);
    }

    #[test]
    fn man_cannot_capture_backwards() {
        let mut board = Board::new_empty();
        board.set_piece(3, 2, Some(Piece::man(Color::Light, 3, 2)));
        board.set_piece(4, 3, Some(Piece::man(Color::Dark, 4, 3)));
        let piece = board.get_piece(3, 2).expect("piece");
        assert!(capture_moves(&board, &piece).is_empty());

        board.set_piece(3, 2, Some(Piece::king(Color::Light, 3, 2)));
        let king = board.get_piece(3, 2).expect("piece");
        assert_eq!(capture_moves(&board, &king), vec![Move::new(sq(3, 2), sq(5, 4))]);
    }

    #[test]
    fn friendly_pieces_are_not_jumped() {
        let mut board = Board::new_empty();
        board.set_piece(5, 2, Some(Piece::man(Color::Light, 5, 2)));
        board.set_piece(4, 3, Some(Piece::man(Color::Light, 4, 3)));
        let piece = board.get_piece(5, 2).expect("piece");
        assert!(capture_moves(&board, &piece).is_empty());
        assert_eq!(possible_moves(&board, &piece), vec![Move::new(sq(5, 2), sq(4, 1))]);
    }
}
