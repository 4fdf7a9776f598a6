//! Crate root module declarations for the Othello engine.
//!
//! Exposes the board engine, search, engines and utility helpers so the
//! match binary, benches and external tooling can import stable module paths.

pub mod othello_errors;

pub mod game_state {
    pub mod board;
    pub mod game_state;
    pub mod othello_types;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod tie_break;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod notation;
    pub mod render_board;
}
