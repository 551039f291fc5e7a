//! Humanized opponent.
//!
//! Scores every legal move at a fixed depth, keeps the strongest few, and
//! samples among them with linearly decreasing weights so the engine plays
//! well without always playing the top line.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::search::alpha_beta::{AlphaBetaSearcher, MoveEvaluation};
use crate::utils::notation::move_to_text;

pub const DEFAULT_CANDIDATE_POOL: usize = 4;

pub struct HumanizedEngine {
    searcher: AlphaBetaSearcher,
    pool: usize,
    rng: StdRng,
}

impl HumanizedEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(depth: u8, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    fn with_rng(depth: u8, rng: StdRng) -> Self {
        Self {
            searcher: AlphaBetaSearcher::with_depth(depth),
            pool: DEFAULT_CANDIDATE_POOL,
            rng,
        }
    }

    /// Number of top candidates sampled from; at least 1.
    pub fn with_pool(mut self, pool: usize) -> Self {
        self.pool = pool.max(1);
        self
    }

    pub fn depth(&self) -> u8 {
        self.searcher.depth()
    }

    /// Best-first candidates paired with their sampling weight.
    pub fn weighted_candidates(&self, board: &Board, side: Color) -> Vec<(MoveEvaluation, u32)> {
        let evaluations = self.searcher.all_move_evaluations(board, side);
        let pool = self.pool.min(evaluations.len());
        evaluations
            .into_iter()
            .take(pool)
            .enumerate()
            .map(|(rank, eval)| (eval, (pool - rank) as u32))
            .collect()
    }
}

impl Engine for HumanizedEngine {
    fn name(&self) -> &str {
        "PlumCheckers Humanized"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> CheckersResult<EngineOutput> {
        let candidates = self.weighted_candidates(board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string humanized depth {} candidates {}",
            self.searcher.depth(),
            candidates.len()
        ));
        if candidates.is_empty() {
            return Ok(out);
        }

        let (picked, _) = candidates
            .as_slice()
            .choose_weighted(&mut self.rng, |(_, weight)| *weight)
            .map_err(|e| CheckersError::Engine(e.to_string()))?;

        debug!(
            side = %side,
            picked = %move_to_text(picked.mv),
            score = picked.score,
            "humanized engine picked a candidate"
        );
        out.best_move = Some(picked.mv);
        out.score = Some(picked.score);
        Ok(out)
    }
}
