//! Pluggable board evaluation interfaces and the heuristic evaluator.
//!
//! Search stays independent of the heuristic by scoring leaves through the
//! `BoardScorer` trait. Every scorer must use the same terminal convention:
//! `+WIN_SCORE` when the opponent has no pieces, `-WIN_SCORE` when the
//! perspective side has none, `STALEMATE_SCORE` when a side cannot move.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{STALEMATE_SCORE, WIN_SCORE};
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::piece_moves::capture_moves;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `perspective`.
    fn score(&self, board: &Board, perspective: Color) -> i32;
}

/// Terminal score shared by every scorer. `None` if the game is not over.
pub fn terminal_score(board: &Board, perspective: Color) -> Option<i32> {
    if !board.is_game_over() {
        return None;
    }

    let light = board.count_pieces(Color::Light);
    let dark = board.count_pieces(Color::Dark);
    let light_view = if light == 0 {
        -WIN_SCORE
    } else if dark == 0 {
        WIN_SCORE
    } else {
        STALEMATE_SCORE
    };

    Some(match perspective {
        Color::Light => light_view,
        Color::Dark => -light_view,
    })
}

/// Evaluation weights. Passed in at construction so different strengths can
/// coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub man_value: i32,
    pub king_value: i32,
    pub center_bonus: i32,
    pub back_rank_king_bonus: i32,
    pub edge_bonus: i32,
    pub mobility_weight: i32,
    pub capture_weight: i32,
    pub threat_weight: i32,
    pub promotion_proximity_weight: i32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            man_value: 100,
            king_value: 300,
            center_bonus: 10,
            back_rank_king_bonus: 20,
            edge_bonus: 5,
            mobility_weight: 2,
            capture_weight: 15,
            threat_weight: 15,
            promotion_proximity_weight: 25,
        }
    }
}

impl EvaluatorConfig {
    #[inline]
    pub const fn piece_value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Man => self.man_value,
            PieceKind::King => self.king_value,
        }
    }
}

/// Material only, plus the shared terminal convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer {
    pub config: EvaluatorConfig,
}

impl MaterialScorer {
    pub fn material_balance(config: &EvaluatorConfig, board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|p| {
                let value = config.piece_value(p.kind);
                if p.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        terminal_score(board, perspective)
            .unwrap_or_else(|| Self::material_balance(&self.config, board, perspective))
    }
}

/// Per-term view of a non-terminal evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationBreakdown {
    pub material: i32,
    pub position: i32,
    pub mobility: i32,
    pub threats: i32,
    pub promotion: i32,
    pub total: i32,
}

/// Heuristic evaluator: material, placement, mobility, threats, and
/// promotion proximity. Only material is measured against the opponent; the
/// other terms count the perspective side's own assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionEvaluator {
    pub config: EvaluatorConfig,
}

impl PositionEvaluator {
    pub const fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn material(&self, board: &Board, side: Color) -> i32 {
        MaterialScorer::material_balance(&self.config, board, side)
    }

    pub fn position(&self, board: &Board, side: Color) -> i32 {
        let c = &self.config;
        board
            .pieces_of(side)
            .map(|p| {
                let mut score = 0;
                if (2..=5).contains(&p.row) && (2..=5).contains(&p.col) {
                    score += c.center_bonus;
                }
                if p.is_king() && p.row == side.home_row() {
                    score += c.back_rank_king_bonus;
                }
                if p.col == 0 || p.col == 7 {
                    score += c.edge_bonus;
                }
                score
            })
            .sum()
    }

    pub fn mobility(&self, board: &Board, side: Color) -> i32 {
        let moves = legal_moves(board, side);
        let captures = moves.iter().filter(|m| m.is_jump()).count() as i32;
        moves.len() as i32 * self.config.mobility_weight + captures * self.config.capture_weight
    }

    /// Raw capture opportunities per piece, counted even where the
    /// mandatory-capture rule would hide them from the legal move list.
    pub fn threats(&self, board: &Board, side: Color) -> i32 {
        board
            .pieces_of(side)
            .map(|p| capture_moves(board, &p).len() as i32 * self.config.threat_weight)
            .sum()
    }

    /// Men within two rows of their promotion row.
    pub fn promotion(&self, board: &Board, side: Color) -> i32 {
        let target = side.promotion_row();
        board
            .pieces_of(side)
            .filter(|p| !p.is_king() && (p.row - target).abs() <= 2)
            .count() as i32
            * self.config.promotion_proximity_weight
    }

    /// Non-terminal terms regardless of whether the game is over.
    pub fn breakdown(&self, board: &Board, side: Color) -> EvaluationBreakdown {
        let material = self.material(board, side);
        let position = self.position(board, side);
        let mobility = self.mobility(board, side);
        let threats = self.threats(board, side);
        let promotion = self.promotion(board, side);
        EvaluationBreakdown {
            material,
            position,
            mobility,
            threats,
            promotion,
            total: material + position + mobility + threats + promotion,
        }
    }

    /// One-ply heuristic for a candidate move: captured value, promotion,
    /// central landing, and the mover's resulting mobility. Does not search.
    pub fn quick_move_score(&self, board: &Board, mv: Move, side: Color) -> i32 {
        let c = &self.config;
        let Some(piece) = board.piece_at(mv.from) else {
            return 0;
        };

        let mut score = 0;
        if let Some(victim) = mv.captured_square().and_then(|sq| board.piece_at(sq)) {
            score += c.piece_value(victim.kind);
        }
        if !piece.is_king() && mv.promotes(side) {
            score += c.promotion_proximity_weight;
        }
        if (2..=5).contains(&mv.to.row) && (2..=5).contains(&mv.to.col) {
            score += c.center_bonus;
        }

        let mut after = board.clone();
        after.move_piece(mv.from, mv.to);
        score += legal_moves(&after, side).len() as i32 * c.mobility_weight;
        score
    }
}

impl BoardScorer for PositionEvaluator {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        match terminal_score(board, perspective) {
            Some(score) => score,
            None => self.breakdown(board, perspective).total,
        }
    }
}
