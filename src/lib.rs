//! Crate root module declarations for the Plum Checkers decision core.
//!
//! This file exposes the subsystems (game state, move generation, search,
//! move analysis, engines, and utility helpers) so the binary, benches, and
//! external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod piece_moves;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod search_worker;
}

pub mod analysis {
    pub mod game_review;
    pub mod move_classifier;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_humanized;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_text;
    pub mod notation;
    pub mod self_play_harness;
}
