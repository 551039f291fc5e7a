//! Copy-on-apply move application.
//!
//! `apply_move` never touches its input; it returns a fresh board plus the
//! captured piece. Promotion is a separate step (`maybe_promote`) so callers
//! control exactly when a man is crowned.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::legal_moves;

/// Apply `mv` to a copy of `board` without legality checks or promotion.
pub fn apply_move(board: &Board, mv: Move) -> (Board, Option<Piece>) {
    let mut next = board.clone();
    let captured = next.move_piece(mv.from, mv.to);
    (next, captured)
}

/// Crown the man of `side` on `square` if it has reached its promotion row.
#[inline]
pub fn maybe_promote(board: &mut Board, square: Square, side: Color) -> bool {
    board.promote_if_due(square, side)
}

/// `apply_move` followed immediately by `maybe_promote` on the landing square.
pub fn apply_move_with_promotion(board: &Board, mv: Move, side: Color) -> (Board, Option<Piece>) {
    let (mut next, captured) = apply_move(board, mv);
    maybe_promote(&mut next, mv.to, side);
    (next, captured)
}

/// Apply a move only if it is among `side`'s legal moves.
pub fn apply_legal_move(board: &Board, mv: Move, side: Color) -> CheckersResult<(Board, Option<Piece>)> {
    if !legal_moves(board, side).contains(&mv) {
        return Err(CheckersError::IllegalMove { mv, side });
    }
    Ok(apply_move_with_promotion(board, mv, side))
}
