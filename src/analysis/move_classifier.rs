//! Post-move quality grading.
//!
//! A played move is compared with the engine's own ranking of every legal
//! move in the position before it was played, using the same fixed-depth
//! search the engine plays with. The gap between the best and the played
//! move, seen from the mover's side, decides the label.

use std::fmt;

use tracing::{debug, warn};

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Move};
use crate::search::alpha_beta::{AlphaBetaSearcher, MoveEvaluation, SearchConfig, MAXIMIZING_SIDE};
use crate::search::board_scoring::{BoardScorer, PositionEvaluator};
use crate::utils::notation::move_to_text;

/// Loss reported for a move that is not legal in the position.
pub const INVALID_MOVE_LOSS: i32 = 1000;

/// Score units per man, used to express losses in material terms.
pub const POINTS_PER_MAN: f64 = 100.0;

/// Engine alternatives kept on each record.
pub const TOP_MOVES_KEPT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveClassification {
    Best,
    Good,
    Inaccuracy,
    Blunder,
}

impl MoveClassification {
    pub const ALL: [MoveClassification; 4] = [
        MoveClassification::Best,
        MoveClassification::Good,
        MoveClassification::Inaccuracy,
        MoveClassification::Blunder,
    ];

    /// Lower-case machine label.
    pub const fn label(self) -> &'static str {
        match self {
            MoveClassification::Best => "best",
            MoveClassification::Good => "good",
            MoveClassification::Inaccuracy => "inaccuracy",
            MoveClassification::Blunder => "blunder",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            MoveClassification::Best => "Best",
            MoveClassification::Good => "Good",
            MoveClassification::Inaccuracy => "Inaccuracy",
            MoveClassification::Blunder => "Blunder",
        }
    }
}

impl fmt::Display for MoveClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Inclusive loss ceilings for each label; anything above `inaccuracy` is a
/// blunder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierThresholds {
    pub best: i32,
    pub good: i32,
    pub inaccuracy: i32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            best: 20,
            good: 80,
            inaccuracy: 150,
        }
    }
}

impl ClassifierThresholds {
    pub fn classify_loss(&self, loss: i32) -> MoveClassification {
        if loss <= self.best {
            MoveClassification::Best
        } else if loss <= self.good {
            MoveClassification::Good
        } else if loss <= self.inaccuracy {
            MoveClassification::Inaccuracy
        } else {
            MoveClassification::Blunder
        }
    }
}

/// Grade of one played move. Scores are Light-oriented engine scores; `loss`
/// is measured from the mover's side and is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub move_number: u32,
    pub side: Color,
    pub played: Move,
    pub classification: MoveClassification,
    pub loss: i32,
    pub best_score: i32,
    pub played_score: i32,
    pub rationale: String,
    pub top_moves: Vec<MoveEvaluation>,
}

impl ClassificationRecord {
    /// Human-readable one-line summary, e.g. `12. dark c3-d4  Good (45)`.
    pub fn summary_line(&self) -> String {
        format!(
            "{}. {} {}  {} ({})",
            self.move_number,
            self.side,
            move_to_text(self.played),
            self.classification,
            self.loss
        )
    }
}

/// Re-orient a Light-perspective score to `side`.
#[inline]
pub fn score_for_side(score: i32, side: Color) -> i32 {
    if side == MAXIMIZING_SIDE {
        score
    } else {
        -score
    }
}

pub fn describe(classification: MoveClassification, loss: i32, alternatives: usize) -> String {
    let men = loss as f64 / POINTS_PER_MAN;
    match classification {
        MoveClassification::Best => format!("Best move! ({alternatives} alternatives)"),
        MoveClassification::Good => {
            format!("Good move, slight advantage loss ({loss} points, ~{men:.1} pawns)")
        }
        MoveClassification::Inaccuracy => {
            format!("Inaccuracy, moderate advantage loss ({loss} points, ~{men:.1} pawns)")
        }
        MoveClassification::Blunder => {
            format!("Blunder! Major advantage loss ({loss} points, ~{men:.1} pawns)")
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoveClassifier<S: BoardScorer = PositionEvaluator> {
    searcher: AlphaBetaSearcher<S>,
    thresholds: ClassifierThresholds,
}

impl MoveClassifier<PositionEvaluator> {
    pub fn with_depth(depth: u8) -> Self {
        Self::new(AlphaBetaSearcher::with_depth(depth), ClassifierThresholds::default())
    }
}

impl<S: BoardScorer> MoveClassifier<S> {
    pub fn new(searcher: AlphaBetaSearcher<S>, thresholds: ClassifierThresholds) -> Self {
        Self {
            searcher,
            thresholds,
        }
    }

    pub fn from_parts(scorer: S, config: SearchConfig, thresholds: ClassifierThresholds) -> Self {
        Self::new(AlphaBetaSearcher::new(scorer, config), thresholds)
    }

    #[inline]
    pub fn thresholds(&self) -> ClassifierThresholds {
        self.thresholds
    }

    #[inline]
    pub fn searcher(&self) -> &AlphaBetaSearcher<S> {
        &self.searcher
    }

    /// Grade `played`, made by `side` from `board_before`.
    pub fn classify(
        &self,
        board_before: &Board,
        played: Move,
        side: Color,
        move_number: u32,
    ) -> ClassificationRecord {
        let evaluated = self.searcher.all_move_evaluations(board_before, side);
        let top_moves: Vec<MoveEvaluation> =
            evaluated.iter().take(TOP_MOVES_KEPT).copied().collect();

        let record = |classification, loss, best_score, played_score, rationale: String| {
            ClassificationRecord {
                move_number,
                side,
                played,
                classification,
                loss,
                best_score,
                played_score,
                rationale,
                top_moves: top_moves.clone(),
            }
        };

        let Some(best) = evaluated.first().copied() else {
            return record(
                MoveClassification::Best,
                0,
                0,
                0,
                "Only move available".to_owned(),
            );
        };

        let Some(played_idx) = evaluated.iter().position(|e| e.mv == played) else {
            warn!(
                side = %side,
                played = %move_to_text(played),
                "classified move is not legal in the position"
            );
            return record(
                MoveClassification::Blunder,
                INVALID_MOVE_LOSS,
                best.score,
                0,
                "Invalid move".to_owned(),
            );
        };
        let played_eval = evaluated[played_idx];

        let (classification, loss) = if played_idx == 0 {
            (MoveClassification::Best, 0)
        } else {
            let loss = (score_for_side(best.score, side) - score_for_side(played_eval.score, side))
                .max(0);
            (self.thresholds.classify_loss(loss), loss)
        };

        debug!(
            move_number,
            side = %side,
            played = %move_to_text(played),
            classification = classification.label(),
            loss,
            "move classified"
        );

        record(
            classification,
            loss,
            best.score,
            played_eval.score,
            describe(classification, loss, top_moves.len()),
        )
    }
}
