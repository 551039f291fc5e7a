//! Plain-text board diagrams.
//!
//! A diagram is eight rows of eight characters, row 0 first:
//! `.` empty, `o`/`O` light man/king, `x`/`X` dark man/king. Rows may be
//! separated by newlines or `/`, and surrounding whitespace is ignored.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::*;

pub fn piece_char(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Man) => 'o',
        (Color::Light, PieceKind::King) => 'O',
        (Color::Dark, PieceKind::Man) => 'x',
        (Color::Dark, PieceKind::King) => 'X',
    }
}

fn char_piece(ch: char, row: i8, col: i8) -> Option<Option<Piece>> {
    match ch {
        '.' | '-' | '_' => Some(None),
        'o' => Some(Some(Piece::man(Color::Light, row, col))),
        'O' => Some(Some(Piece::king(Color::Light, row, col))),
        'x' => Some(Some(Piece::man(Color::Dark, row, col))),
        'X' => Some(Some(Piece::king(Color::Dark, row, col))),
        _ => None,
    }
}

pub fn parse_board(diagram: &str) -> CheckersResult<Board> {
    let rows: Vec<&str> = diagram
        .split(['\n', '/'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != BOARD_SIZE as usize {
        return Err(CheckersError::InvalidDiagram {
            row: rows.len(),
            reason: format!("expected {BOARD_SIZE} rows, found {}", rows.len()),
        });
    }

    let mut board = Board::new_empty();
    for (row_idx, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != BOARD_SIZE as usize {
            return Err(CheckersError::InvalidDiagram {
                row: row_idx,
                reason: format!("expected {BOARD_SIZE} squares, found {}", cells.len()),
            });
        }

        let row = row_idx as i8;
        for (col_idx, ch) in cells.into_iter().enumerate() {
            let col = col_idx as i8;
            let slot = char_piece(ch, row, col).ok_or_else(|| CheckersError::InvalidDiagram {
                row: row_idx,
                reason: format!("unknown square marker '{ch}'"),
            })?;
            if slot.is_some() && !Square::new(row, col).is_dark() {
                return Err(CheckersError::InvalidDiagram {
                    row: row_idx,
                    reason: format!("piece on light square at column {col}"),
                });
            }
            board.set_piece(row, col, slot);
        }
    }

    Ok(board)
}

/// Render `board` in the same format `parse_board` accepts.
pub fn board_to_diagram(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..BOARD_SIZE {
            out.push(board.get_piece(row, col).map_or('.', |p| piece_char(&p)));
        }
    }
    out
}

/// Terminal view with file letters and rank numbers matching move notation.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'0' + (BOARD_SIZE - row) as u8);
        out.push(rank);
        out.push(' ');
        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            let ch = match board.piece_at(square) {
                Some(piece) => piece_char(&piece),
                None if square.is_dark() => '·',
                None => ' ',
            };
            out.push(ch);
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }
        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagram_round_trips_through_board() {
        let text = "\
.X......
........
...x....
....o...
........
........
........
O.......";
        let board = parse_board(text).expect("diagram should parse");
        assert_eq!(board_to_diagram(&board), text);
        assert!(board.get_piece(0, 1).is_some_and(|p| p.is_king() && p.color == Color::Dark));
        assert!(board.get_piece(7, 0).is_some_and(|p| p.is_king() && p.color == Color::Light));
    }

    #[test]
    fn slash_separated_rows_are_accepted() {
        let board = parse_board("8/8/8/8/8/8/8/8".replace('8', "........").as_str())
            .expect("empty diagram should parse");
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn rejects_wrong_row_count() {
        let err = parse_board("........\n........").expect_err("two rows is not a board");
        assert!(matches!(err, CheckersError::InvalidDiagram { .. }));
    }

    #[test]
    fn rejects_pieces_on_light_squares() {
        let text = "o.......\n........\n........\n........\n........\n........\n........\n........";
        let err = parse_board(text).expect_err("(0,0) is a light square");
        assert!(matches!(err, CheckersError::InvalidDiagram { row: 0, .. }));
    }

    #[test]
    fn rejects_unknown_markers() {
        let text = ".q......\n........\n........\n........\n........\n........\n........\n........";
        assert!(parse_board(text).is_err());
    }

    #[test]
    fn render_labels_ranks_from_the_light_side() {
        let rendered = render_board(&Board::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with('8'));
        assert!(lines[8].starts_with('1'));
        assert!(lines[8].contains('o'));
        assert!(lines[1].contains('x'));
    }
}
