use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::legal_moves_with_positions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Count leaf positions `depth` plies below `board` with `side` to move.
///
/// Capture and promotion counters tally the moves made on the last ply.
/// A side with no legal move contributes no leaves.
pub fn perft(board: &Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in legal_moves_with_positions(board, side) {
        if depth == 1 {
            total.nodes += 1;
            if generated.captured.is_some() {
                total.captures += 1;
            }
            let promoted = board.piece_at(generated.mv.from).is_some_and(|p| !p.is_king())
                && generated
                    .board_after
                    .piece_at(generated.mv.to)
                    .is_some_and(|p| p.is_king());
            if promoted {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(&generated.board_after, side.opposite(), depth - 1));
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::Color;

    #[test]
    fn perft_from_start_position() {
        let board = Board::new_game();
        assert_eq!(perft(&board, Color::Light, 0).nodes, 1);
        assert_eq!(perft(&board, Color::Light, 1).nodes, 7);
        assert_eq!(perft(&board, Color::Light, 2).nodes, 49);
        assert_eq!(perft(&board, Color::Light, 3).nodes, 302);
        assert_eq!(perft(&board, Color::Light, 4).nodes, 1469);
    }

    #[test]
    fn third_ply_contains_forced_captures() {
        let counts = perft(&Board::new_game(), Color::Light, 3);
        assert!(counts.captures > 0);
        assert_eq!(counts.promotions, 0);
    }

    #[test]
    fn perft_kings_endgame() {
        let board = Board::from_diagram(
            "......../......X./......../..x...../......../..O...o./......../o.......",
        )
        .expect("valid diagram");
        let nodes: Vec<usize> = (1..=5).map(|d| perft(&board, Color::Light, d).nodes).collect();
        assert_eq!(nodes, vec![7, 32, 160, 599, 2709]);
    }
}
