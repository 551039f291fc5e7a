//! Core value types shared by the rules model, search, and analysis layers.
//!
//! Sides, piece kinds, board squares, pieces, and moves live here so every
//! other module agrees on a single vocabulary for board coordinates.

use std::fmt;

use crate::game_state::checkers_rules::{BOARD_SIZE, DARK_HOME_ROW, LIGHT_HOME_ROW};

/// One of the two sides.
///
/// `Light` is the maximizing side for search scores. Its men move toward
/// row 0; `Dark` men move toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row a man of this color must reach to be crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Light => DARK_HOME_ROW,
            Color::Dark => LIGHT_HOME_ROW,
        }
    }

    /// Row this color starts nearest to.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::Light => LIGHT_HOME_ROW,
            Color::Dark => DARK_HOME_ROW,
        }
    }

    /// Row step a man of this color takes when moving forward.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "light",
            Color::Dark => "dark",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece capability. Direction sets are decided only in [`PieceKind::directions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const LIGHT_FORWARD: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const DARK_FORWARD: [(i8, i8); 2] = [(1, -1), (1, 1)];

impl PieceKind {
    /// Diagonal steps a piece of this kind and color may move or capture along.
    #[inline]
    pub fn directions(self, color: Color) -> &'static [(i8, i8)] {
        match (self, color) {
            (PieceKind::King, _) => &ALL_DIAGONALS,
            (PieceKind::Man, Color::Light) => &LIGHT_FORWARD,
            (PieceKind::Man, Color::Dark) => &DARK_FORWARD,
        }
    }
}

/// Board coordinate. Values outside `0..8` are representable so that
/// direction arithmetic can step off the board and be rejected afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Playable squares are the dark ones.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Self::new(row, col)
    }
}

/// A piece on the board. `row`/`col` always mirror the slot that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    pub const fn man(color: Color, row: i8, col: i8) -> Self {
        Self {
            color,
            kind: PieceKind::Man,
            row,
            col,
        }
    }

    pub const fn king(color: Color, row: i8, col: i8) -> Self {
        Self {
            color,
            kind: PieceKind::King,
            row,
            col,
        }
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    pub const fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    #[inline]
    pub fn make_king(&mut self) {
        self.kind = PieceKind::King;
    }

    #[inline]
    pub fn directions(&self) -> &'static [(i8, i8)] {
        self.kind.directions(self.color)
    }
}

/// A single diagonal step or single jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub const fn is_jump(&self) -> bool {
        (self.to.row - self.from.row).abs() == 2
    }

    /// Square strictly between `from` and `to` on a jump.
    #[inline]
    pub const fn captured_square(&self) -> Option<Square> {
        if self.is_jump() {
            Some(Square::new(
                (self.from.row + self.to.row) / 2,
                (self.from.col + self.to.col) / 2,
            ))
        } else {
            None
        }
    }

    /// Whether a man of `color` landing here would be crowned.
    #[inline]
    pub const fn promotes(&self, color: Color) -> bool {
        self.to.row == color.promotion_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn man_directions_point_toward_promotion_row() {
        for &(dr, _) in PieceKind::Man.directions(Color::Light) {
            assert_eq!(dr, Color::Light.forward());
        }
        for &(dr, _) in PieceKind::Man.directions(Color::Dark) {
            assert_eq!(dr, Color::Dark.forward());
        }
        assert_eq!(PieceKind::King.directions(Color::Light).len(), 4);
        assert_eq!(PieceKind::King.directions(Color::Dark).len(), 4);
    }

    #[test]
    fn jump_reports_midpoint() {
        let mv = Move::new(Square::new(5, 2), Square::new(3, 4));
        assert!(mv.is_jump());
        assert_eq!(mv.captured_square(), Some(Square::new(4, 3)));

        let step = Move::new(Square::new(5, 2), Square::new(4, 3));
        assert!(!step.is_jump());
        assert_eq!(step.captured_square(), None);
    }

    #[test]
    fn promotion_rows_are_opposite_home_rows() {
        assert_eq!(Color::Light.promotion_row(), 0);
        assert_eq!(Color::Dark.promotion_row(), 7);
        assert!(Move::new(Square::new(1, 2), Square::new(0, 1)).promotes(Color::Light));
        assert!(!Move::new(Square::new(1, 2), Square::new(0, 1)).promotes(Color::Dark));
    }
}
