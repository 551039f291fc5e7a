//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! harness testing, and the weakest opponent setting.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> CheckersResult<EngineOutput> {
        let moves = legal_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", moves.len()));

        if moves.is_empty() {
            return Ok(out);
        }

        let picked = moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| CheckersError::Engine("failed to choose a random move".to_owned()))?;
        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let board = Board::new_game();
        let mut engine = RandomEngine::seeded(7);
        for _ in 0..20 {
            let out = engine.choose_move(&board, Color::Dark).expect("engine should reply");
            let mv = out.best_move.expect("opening has moves");
            assert!(legal_moves(&board, Color::Dark).contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new_game();
        let mut a = RandomEngine::seeded(42);
        let mut b = RandomEngine::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board, Color::Light).map(|o| o.best_move),
                b.choose_move(&board, Color::Light).map(|o| o.best_move)
            );
        }
    }

    #[test]
    fn no_moves_gives_none() {
        let mut engine = RandomEngine::seeded(1);
        let out = engine
            .choose_move(&Board::new_empty(), Color::Light)
            .expect("engine should reply");
        assert_eq!(out.best_move, None);
    }
}
