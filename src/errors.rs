//! Error types for the fallible surfaces of the crate.
//!
//! Rules, evaluation, and search report "no move" or "invalid move" through
//! ordinary return values. Errors here cover text parsing, engine policy,
//! the background search worker, and game harness bookkeeping.

use thiserror::Error;

use crate::game_state::checkers_types::{Color, Move};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Board diagram could not be parsed.
    #[error("invalid board diagram at row {row}: {reason}")]
    InvalidDiagram { row: usize, reason: String },

    /// Move text such as `c3-d4` could not be parsed.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),

    /// Move is not in the side's legal move list.
    #[error("illegal move {mv:?} for {side}")]
    IllegalMove { mv: Move, side: Color },

    /// Engine could not produce a move for a reason other than "no legal move".
    #[error("engine error: {0}")]
    Engine(String),

    /// Background search worker is gone.
    #[error("search worker disconnected")]
    WorkerDisconnected,
}

pub type CheckersResult<T> = Result<T, CheckersError>;
