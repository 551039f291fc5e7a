//! Coordinate move notation, e.g. `c3-d4`.
//!
//! Files `a..h` map to columns `0..8`; ranks count up from Light's side, so
//! rank `1` is row 7 and rank `8` is row 0. Jumps may be written with `x`.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Move, Square};

/// Off-board squares render as `??`.
pub fn square_to_text(square: Square) -> String {
    if !square.in_bounds() {
        return "??".to_owned();
    }
    let file = char::from(b'a' + square.col as u8);
    let rank = BOARD_SIZE - square.row;
    format!("{file}{rank}")
}

pub fn text_to_square(text: &str) -> CheckersResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(CheckersError::InvalidNotation(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(CheckersError::InvalidNotation(text.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = BOARD_SIZE - (rank - b'0') as i8;
    Ok(Square::new(row, col))
}

pub fn move_to_text(mv: Move) -> String {
    format!("{}-{}", square_to_text(mv.from), square_to_text(mv.to))
}

pub fn text_to_move(text: &str) -> CheckersResult<Move> {
    let trimmed = text.trim();
    let (from, to) = trimmed
        .split_once(['-', 'x', 'X'])
        .ok_or_else(|| CheckersError::InvalidNotation(trimmed.to_owned()))?;
    Ok(Move::new(text_to_square(from)?, text_to_square(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_expected_text() {
        assert_eq!(square_to_text(Square::new(7, 0)), "a1");
        assert_eq!(square_to_text(Square::new(0, 7)), "h8");
        assert_eq!(text_to_square("a1"), Ok(Square::new(7, 0)));
        assert_eq!(text_to_square("H8"), Ok(Square::new(0, 7)));
        assert_eq!(square_to_text(Square::new(-1, 9)), "??");
    }

    #[test]
    fn formats_opening_step() {
        let mv = Move::new(Square::new(5, 2), Square::new(4, 3));
        assert_eq!(move_to_text(mv), "c3-d4");
        assert_eq!(text_to_move("c3-d4"), Ok(mv));
    }

    #[test]
    fn accepts_capture_separator() {
        let mv = text_to_move(" c3xe5 ").expect("capture notation should parse");
        assert_eq!(mv, Move::new(Square::new(5, 2), Square::new(3, 4)));
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "c3", "c3-d9", "i1-a2", "c3d4", "c33-d4"] {
            assert!(text_to_move(bad).is_err(), "{bad} should not parse");
        }
    }
}
