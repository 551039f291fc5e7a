//! Engine-vs-engine game loop for local testing and the CLI.
//!
//! Runs two `Engine` implementations against each other from the opening
//! (or a supplied position), optionally grading every move with the
//! classifier, and stops on a win, threefold repetition, or the ply cap.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, info};

use crate::analysis::game_review::GameReview;
use crate::analysis::move_classifier::MoveClassifier;
use crate::engines::engine_trait::Engine;
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Move, Piece};
use crate::move_generation::legal_move_apply::apply_legal_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::notation::move_to_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    LightWin,
    DarkWin,
    DrawRepetition,
    DrawMaxPlies,
}

impl GameOutcome {
    fn win_for(color: Color) -> Self {
        match color {
            Color::Light => GameOutcome::LightWin,
            Color::Dark => GameOutcome::DarkWin,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::LightWin => Some(Color::Light),
            GameOutcome::DarkWin => Some(Color::Dark),
            GameOutcome::DrawRepetition | GameOutcome::DrawMaxPlies => None,
        }
    }

    pub fn result_line(self) -> &'static str {
        match self {
            GameOutcome::LightWin => "light wins",
            GameOutcome::DarkWin => "dark wins",
            GameOutcome::DrawRepetition => "draw by threefold repetition",
            GameOutcome::DrawMaxPlies => "draw by move limit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Classifier depth; `None` skips move grading.
    pub analysis_depth: Option<u8>,
    pub repetition_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            analysis_depth: Some(5),
            repetition_limit: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyRecord {
    pub ply: u32,
    pub side: Color,
    pub mv: Move,
    pub captured: Option<Piece>,
    pub notation: String,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub final_board: Board,
    pub plies: Vec<PlyRecord>,
    pub review: GameReview,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

/// Turn-by-turn game state shared by the engine harness and the
/// interactive CLI: legality, per-move grading, and repetition tracking.
pub struct GameSession {
    board: Board,
    to_move: Color,
    classifier: Option<MoveClassifier>,
    review: GameReview,
    plies: Vec<PlyRecord>,
    seen: HashMap<(String, Color), usize>,
    repetition_limit: usize,
}

impl GameSession {
    pub fn new(board: Board, to_move: Color, analysis_depth: Option<u8>, repetition_limit: usize) -> Self {
        let mut seen = HashMap::new();
        seen.insert((board.position_key(), to_move), 1);
        Self {
            board,
            to_move,
            classifier: analysis_depth.map(MoveClassifier::with_depth),
            review: GameReview::new(),
            plies: Vec::new(),
            seen,
            repetition_limit,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn review(&self) -> &GameReview {
        &self.review
    }

    pub fn plies(&self) -> &[PlyRecord] {
        &self.plies
    }

    /// Decided result, if any: a repeated position or a side to move that
    /// has no pieces or no legal move.
    pub fn outcome(&self) -> Option<GameOutcome> {
        let repeats = self
            .seen
            .get(&(self.board.position_key(), self.to_move))
            .copied()
            .unwrap_or(0);
        if repeats >= self.repetition_limit {
            return Some(GameOutcome::DrawRepetition);
        }
        if self.board.count_pieces(self.to_move) == 0 || legal_moves(&self.board, self.to_move).is_empty() {
            return Some(GameOutcome::win_for(self.to_move.opposite()));
        }
        None
    }

    /// Grade and play `mv` for the side to move. Illegal moves leave the
    /// session untouched.
    pub fn play(&mut self, mv: Move) -> CheckersResult<&PlyRecord> {
        let side = self.to_move;
        let (next, captured) = apply_legal_move(&self.board, mv, side)?;

        let ply = self.plies.len() as u32 + 1;
        if let Some(classifier) = &self.classifier {
            let record = classifier.classify(&self.board, mv, side, ply);
            debug!(line = %record.summary_line(), "classified move");
            self.review.push(record);
        }

        let notation = move_to_text(mv);
        info!(ply, side = %side, mv = %notation, "move played");

        self.board = next;
        self.to_move = side.opposite();
        *self
            .seen
            .entry((self.board.position_key(), self.to_move))
            .or_default() += 1;

        let idx = self.plies.len();
        self.plies.push(PlyRecord {
            ply,
            side,
            mv,
            captured,
            notation,
        });
        Ok(&self.plies[idx])
    }

    pub fn into_parts(self) -> (Board, Vec<PlyRecord>, GameReview) {
        (self.board, self.plies, self.review)
    }
}

/// Play a full game from the standard opening. Light moves first.
pub fn play_game(
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    config: &MatchConfig,
) -> CheckersResult<GameRecord> {
    play_game_from(Board::new_game(), Color::Light, light, dark, config)
}

/// Play from a caller-provided position with `to_move` on turn.
pub fn play_game_from(
    board: Board,
    to_move: Color,
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    config: &MatchConfig,
) -> CheckersResult<GameRecord> {
    light.new_game();
    dark.new_game();

    let mut session = GameSession::new(board, to_move, config.analysis_depth, config.repetition_limit);
    let mut light_total_time_ns = 0u128;
    let mut dark_total_time_ns = 0u128;

    let outcome = loop {
        if session.plies().len() >= usize::from(config.max_plies) {
            break GameOutcome::DrawMaxPlies;
        }
        if let Some(outcome) = session.outcome() {
            break outcome;
        }

        let side = session.to_move();
        let engine: &mut dyn Engine = match side {
            Color::Light => &mut *light,
            Color::Dark => &mut *dark,
        };
        let started = Instant::now();
        let out = engine.choose_move(session.board(), side)?;
        let elapsed_ns = started.elapsed().as_nanos();
        match side {
            Color::Light => light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns),
            Color::Dark => dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns),
        }

        let chosen = out.best_move.ok_or_else(|| {
            CheckersError::Engine(format!("{} returned no move with moves available", engine.name()))
        })?;
        session.play(chosen)?;
    };

    let (final_board, plies, review) = session.into_parts();
    info!(outcome = outcome.result_line(), plies = plies.len(), "game finished");
    Ok(GameRecord {
        outcome,
        final_board,
        plies,
        review,
        light_total_time_ns,
        dark_total_time_ns,
    })
}
