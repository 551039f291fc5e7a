//! Opponent strength presets.

use std::fmt;
use std::str::FromStr;

use crate::engines::engine_humanized::HumanizedEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::CheckersError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            other => Err(CheckersError::Engine(format!("unknown difficulty '{other}'"))),
        }
    }
}

/// Opponent for `difficulty`. Hard plays the top line; the others sample
/// from the top candidates.
pub fn build_engine(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Engine> {
    match (difficulty, seed) {
        (Difficulty::Hard, _) => Box::new(MinimaxEngine::new(difficulty.depth())),
        (_, Some(seed)) => Box::new(HumanizedEngine::seeded(difficulty.depth(), seed)),
        (_, None) => Box::new(HumanizedEngine::new(difficulty.depth())),
    }
}
