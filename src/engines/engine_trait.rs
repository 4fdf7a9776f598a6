//! Engine abstraction used by the match harness and binaries.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped at runtime behind one trait.

use crate::game_state::game_state::Game;
use crate::game_state::othello_types::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` means the side to move passes.
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game: &Game, params: &GoParams) -> Result<EngineOutput, String>;
}
