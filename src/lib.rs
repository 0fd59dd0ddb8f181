//! Crate root module declarations for the Plum Draughts engine project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! search, engines and utility helpers) so binaries, benches and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod board_state;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod history_entry;
}

pub mod moves {
    pub mod diagonal_rays;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod legal_turns;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod layer_orientation;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_options;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod game_settings;
    pub mod render_board;
}
