//! Engine abstraction layer used by the self-play harness and the CLI.
//!
//! Defines the common output payload so different move-selection policies
//! can be swapped at runtime behind a single trait object.

use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Move};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Light-oriented search score of the chosen move, when the engine has one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for `side`. `best_move` is `None` when `side` cannot move.
    fn choose_move(&mut self, board: &Board, side: Color) -> CheckersResult<EngineOutput>;
}
