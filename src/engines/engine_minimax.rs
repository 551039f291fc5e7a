//! Deterministic fixed-depth alpha-beta engine.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::search::alpha_beta::AlphaBetaSearcher;
use crate::utils::notation::move_to_text;

pub struct MinimaxEngine {
    searcher: AlphaBetaSearcher,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            searcher: AlphaBetaSearcher::with_depth(depth),
        }
    }

    pub fn from_searcher(searcher: AlphaBetaSearcher) -> Self {
        Self { searcher }
    }

    pub fn depth(&self) -> u8 {
        self.searcher.depth()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumCheckers Minimax"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> CheckersResult<EngineOutput> {
        let mut out = EngineOutput::default();
        let Some(result) = self.searcher.best_move(board, side) else {
            out.info_lines
                .push("info string minimax no_legal_moves".to_owned());
            return Ok(out);
        };

        out.best_move = Some(result.mv);
        out.score = Some(result.score);
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} prunes {} pv {}",
            self.searcher.depth(),
            result.score,
            result.stats.nodes,
            result.stats.prunes,
            move_to_text(result.mv)
        ));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{Move, Square};
    use crate::search::alpha_beta::search_best_move;

    #[test]
    fn opening_choice_matches_search() {
        let mut engine = MinimaxEngine::new(4);
        let out = engine
            .choose_move(&Board::new_game(), Color::Light)
            .expect("engine should reply");
        assert_eq!(
            out.best_move,
            Some(Move::new(Square::new(5, 6), Square::new(4, 5)))
        );
        assert_eq!(out.score, Some(49));
        assert_eq!(
            out.info_lines,
            vec!["info depth 4 score 49 nodes 900 prunes 102 pv g3-f4".to_owned()]
        );
    }

    #[test]
    fn wraps_a_configured_searcher() {
        let board = Board::new_game();
        let mut engine = MinimaxEngine::from_searcher(AlphaBetaSearcher::with_depth(1));
        assert_eq!(engine.depth(), 1);

        let expected = search_best_move(&board, Color::Dark, 1).expect("opening has moves");
        let out = engine.choose_move(&board, Color::Dark).expect("engine should reply");
        assert_eq!(out.best_move, Some(expected.mv));
        assert_eq!(out.score, Some(expected.score));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let board = Board::new_game();
        let mut engine = MinimaxEngine::new(3);
        let first = engine.choose_move(&board, Color::Dark).expect("engine should reply");
        let second = engine.choose_move(&board, Color::Dark).expect("engine should reply");
        assert_eq!(first, second);
    }

    #[test]
    fn stuck_side_gets_no_move() {
        let mut engine = MinimaxEngine::new(2);
        let out = engine
            .choose_move(&Board::new_empty(), Color::Dark)
            .expect("engine should reply");
        assert_eq!(out.best_move, None);
        assert_eq!(out.score, None);
    }
}
