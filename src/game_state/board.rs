//! Mailbox board representation.
//!
//! `Board` owns an 8x8 grid of optional pieces. Every hypothetical line the
//! search explores runs on its own `clone()` of the board, so the grid is a
//! plain value with no shared interior state.

use crate::game_state::checkers_rules::{
    BOARD_SIZE, DARK_START_ROWS, LIGHT_START_ROWS, STARTING_POSITION_DIAGRAM,
};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::{has_legal_moves, legal_moves};
use crate::utils::board_text::parse_board;

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            grid: [[None; SIZE]; SIZE],
        }
    }

    /// Standard opening layout: twelve men per side on the dark squares of
    /// each side's three nearest rows.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !Square::new(row, col).is_dark() {
                    continue;
                }
                if LIGHT_START_ROWS.contains(&row) {
                    board.set_piece(row, col, Some(Piece::man(Color::Light, row, col)));
                } else if DARK_START_ROWS.contains(&row) {
                    board.set_piece(row, col, Some(Piece::man(Color::Dark, row, col)));
                }
            }
        }
        board
    }

    /// Build a board from a text diagram (see [`crate::utils::board_text`]).
    #[inline]
    pub fn from_diagram(diagram: &str) -> crate::errors::CheckersResult<Self> {
        parse_board(diagram)
    }

    /// The starting diagram, kept in sync with [`Board::new_game`].
    pub fn starting_diagram() -> &'static str {
        STARTING_POSITION_DIAGRAM
    }

    /// Piece on `(row, col)`; out-of-range coordinates read as empty.
    #[inline]
    pub fn get_piece(&self, row: i8, col: i8) -> Option<Piece> {
        if Square::new(row, col).in_bounds() {
            self.grid[row as usize][col as usize]
        } else {
            None
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get_piece(square.row, square.col)
    }

    /// Place or clear a square. Out-of-range coordinates are ignored. A placed
    /// piece has its coordinates rewritten to match the slot.
    pub fn set_piece(&mut self, row: i8, col: i8, piece: Option<Piece>) {
        if !Square::new(row, col).in_bounds() {
            return;
        }
        self.grid[row as usize][col as usize] = piece.map(|mut p| {
            p.row = row;
            p.col = col;
            p
        });
    }

    /// Relocate the piece on `from` to `to` without any legality check.
    ///
    /// A two-row displacement removes whatever sits on the midpoint square and
    /// returns it. Returns `None` when `from` is empty or off the board.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        if !from.in_bounds() || !to.in_bounds() {
            return None;
        }
        let piece = self.piece_at(from)?;

        let mut captured = None;
        if (to.row - from.row).abs() == 2 {
            let mid = Square::new((from.row + to.row) / 2, (from.col + to.col) / 2);
            captured = self.piece_at(mid);
            self.set_piece(mid.row, mid.col, None);
        }

        self.set_piece(from.row, from.col, None);
        self.set_piece(to.row, to.col, Some(piece));
        captured
    }

    /// Crown the man on `square` if it belongs to `side` and sits on that
    /// side's promotion row. Returns whether a promotion happened.
    pub fn promote_if_due(&mut self, square: Square, side: Color) -> bool {
        match self.piece_at(square) {
            Some(mut piece)
                if piece.color == side
                    && !piece.is_king()
                    && square.row == side.promotion_row() =>
            {
                piece.make_king();
                self.set_piece(square.row, square.col, Some(piece));
                true
            }
            _ => false,
        }
    }

    /// Legality predicate for a single step or jump by `side`.
    ///
    /// Step moves are restricted to the piece's direction set. Jumps only
    /// require an enemy piece on the midpoint; direction for jumps is enforced
    /// by move generation.
    pub fn is_valid_move(&self, from: Square, to: Square, side: Color) -> bool {
        if !from.in_bounds() || !to.in_bounds() {
            return false;
        }

        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if piece.color != side || self.piece_at(to).is_some() {
            return false;
        }

        let dr = to.row - from.row;
        let dc = to.col - from.col;
        if dr.abs() != dc.abs() {
            return false;
        }

        match dr.abs() {
            1 => piece.is_king() || dr == side.forward(),
            2 => {
                let mid = Square::new(from.row + dr / 2, from.col + dc / 2);
                matches!(self.piece_at(mid), Some(victim) if victim.color != side)
            }
            _ => false,
        }
    }

    /// Iterate all pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flat_map(|row| row.iter().flatten().copied())
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces_of(color).filter(Piece::is_king).count()
    }

    pub fn piece_positions(&self, color: Color) -> Vec<Square> {
        self.pieces_of(color).map(|p| p.square()).collect()
    }

    #[inline]
    pub fn has_legal_moves(&self, side: Color) -> bool {
        has_legal_moves(self, side)
    }

    /// Terminal when either side has no pieces or either side has no legal move.
    pub fn is_game_over(&self) -> bool {
        if self.count_pieces(Color::Light) == 0 || self.count_pieces(Color::Dark) == 0 {
            return true;
        }
        !self.has_legal_moves(Color::Light) || !self.has_legal_moves(Color::Dark)
    }

    /// Legal moves for `side`, honoring the mandatory-capture rule.
    #[inline]
    pub fn get_all_moves(&self, side: Color) -> Vec<Move> {
        legal_moves(self, side)
    }

    /// Compact 64-character key (one char per square) for repetition tracking.
    pub fn position_key(&self) -> String {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .map(|slot| match slot {
                None => '.',
                Some(p) => crate::utils::board_text::piece_char(p),
            })
            .collect()
    }
}
