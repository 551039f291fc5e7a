//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Scores are always oriented to `Color::Light`: Light nodes maximize, Dark
//! nodes minimize, and leaves are scored from Light's perspective no matter
//! whose turn it is. Every branch runs on its own board copy.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Move};
use crate::move_generation::legal_move_apply::apply_move_with_promotion;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_with_positions};
use crate::search::board_scoring::{BoardScorer, PositionEvaluator};

/// Side whose score the search maximizes.
pub const MAXIMIZING_SIDE: Color = Color::Light;

/// Window bound, far outside any reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root, counting the root move itself.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub prunes: u64,
}

impl SearchStats {
    /// Cutoffs per visited node.
    pub fn efficiency(&self) -> f64 {
        self.prunes as f64 / self.nodes.max(1) as f64
    }
}

/// Chosen move with its Light-oriented score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub mv: Move,
    pub score: i32,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub mv: Move,
    pub score: i32,
}

#[derive(Debug, Clone)]
pub struct AlphaBetaSearcher<S: BoardScorer = PositionEvaluator> {
    scorer: S,
    config: SearchConfig,
}

impl AlphaBetaSearcher<PositionEvaluator> {
    pub fn with_depth(depth: u8) -> Self {
        Self::new(PositionEvaluator::default(), SearchConfig { depth })
    }
}

impl<S: BoardScorer> AlphaBetaSearcher<S> {
    pub fn new(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Best move for `side`, or `None` if `side` has no legal move.
    ///
    /// A lone legal move is returned immediately with score 0. Otherwise
    /// each root move is searched with a fresh full window and the first
    /// move reaching the best score wins.
    pub fn best_move(&self, board: &Board, side: Color) -> Option<SearchResult> {
        let mut candidates = legal_moves_with_positions(board, side);
        if candidates.len() <= 1 {
            return candidates.pop().map(|only| SearchResult {
                mv: only.mv,
                score: 0,
                stats: SearchStats::default(),
            });
        }

        let mut stats = SearchStats::default();
        let child_depth = self.config.depth.saturating_sub(1);
        let mut best: Option<(Move, i32)> = None;

        for candidate in candidates {
            let score = self.minimax(
                &candidate.board_after,
                child_depth,
                side.opposite(),
                -SCORE_INFINITY,
                SCORE_INFINITY,
                &mut stats,
            );

            let improves = match best {
                None => true,
                Some((_, best_score)) if side == MAXIMIZING_SIDE => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((candidate.mv, score));
            }
        }

        debug!(
            side = %side,
            depth = self.config.depth,
            nodes = stats.nodes,
            prunes = stats.prunes,
            "best move search finished"
        );

        best.map(|(mv, score)| SearchResult { mv, score, stats })
    }

    /// Light-oriented minimax value of `board` with `side` to move.
    ///
    /// Stops at depth 0, at a finished game, or when `side` has no move, and
    /// returns the static score there. Siblings are skipped once
    /// `beta <= alpha`; each skip counts as one prune.
    pub fn minimax(
        &self,
        board: &Board,
        depth: u8,
        side: Color,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;

        if depth == 0 || board.is_game_over() {
            return self.scorer.score(board, MAXIMIZING_SIDE);
        }

        // Children are built one at a time so cut-off siblings are never copied.
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            return self.scorer.score(board, MAXIMIZING_SIDE);
        }

        if side == MAXIMIZING_SIDE {
            let mut best = -SCORE_INFINITY;
            for mv in moves {
                let (child, _) = apply_move_with_promotion(board, mv, side);
                let score = self.minimax(&child, depth - 1, side.opposite(), alpha, beta, stats);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    stats.prunes += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_INFINITY;
            for mv in moves {
                let (child, _) = apply_move_with_promotion(board, mv, side);
                let score = self.minimax(&child, depth - 1, side.opposite(), alpha, beta, stats);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    stats.prunes += 1;
                    break;
                }
            }
            best
        }
    }

    /// Score of playing `mv` for `side`: apply it (with promotion) and search
    /// the reply at `depth - 1`.
    pub fn evaluate_candidate(&self, board: &Board, mv: Move, side: Color) -> i32 {
        let mut stats = SearchStats::default();
        self.evaluate_candidate_with_stats(board, mv, side, &mut stats)
    }

    pub fn evaluate_candidate_with_stats(
        &self,
        board: &Board,
        mv: Move,
        side: Color,
        stats: &mut SearchStats,
    ) -> i32 {
        let (after, _) = apply_move_with_promotion(board, mv, side);
        self.minimax(
            &after,
            self.config.depth.saturating_sub(1),
            side.opposite(),
            -SCORE_INFINITY,
            SCORE_INFINITY,
            stats,
        )
    }

    /// Every legal move scored with [`Self::evaluate_candidate`], best-first
    /// for `side`. Equal scores keep generation order.
    pub fn all_move_evaluations(&self, board: &Board, side: Color) -> Vec<MoveEvaluation> {
        let mut stats = SearchStats::default();
        let mut evaluated: Vec<MoveEvaluation> = legal_moves(board, side)
            .into_iter()
            .map(|mv| MoveEvaluation {
                mv,
                score: self.evaluate_candidate_with_stats(board, mv, side, &mut stats),
            })
            .collect();

        if side == MAXIMIZING_SIDE {
            evaluated.sort_by(|a, b| b.score.cmp(&a.score));
        } else {
            evaluated.sort_by(|a, b| a.score.cmp(&b.score));
        }

        debug!(
            side = %side,
            depth = self.config.depth,
            moves = evaluated.len(),
            nodes = stats.nodes,
            "move evaluations finished"
        );
        evaluated
    }
}

/// Best move for `side` at `depth` with the default evaluator.
pub fn search_best_move(board: &Board, side: Color, depth: u8) -> Option<SearchResult> {
    AlphaBetaSearcher::with_depth(depth).best_move(board, side)
}

/// All legal moves scored at `depth` with the default evaluator, best-first.
pub fn evaluate_moves(board: &Board, side: Color, depth: u8) -> Vec<MoveEvaluation> {
    AlphaBetaSearcher::with_depth(depth).all_move_evaluations(board, side)
}
