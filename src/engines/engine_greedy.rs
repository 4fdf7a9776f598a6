use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::Game;
use crate::move_generation::legal_move_generator::flips_for_move;

/// Takes whichever placement flips the most discs right now.
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Othello Greedy"
    }

    fn choose_move(&mut self, game: &Game, _params: &GoParams) -> Result<EngineOutput, String> {
        let legal_moves = game.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut best_value = 0u32;
        let mut best_moves = Vec::new();

        for mv in legal_moves {
            let flips = flips_for_move(&game.board, mv, game.side_to_move).count_ones();
            if flips > best_value {
                best_value = flips;
                best_moves.clear();
                best_moves.push(mv);
            } else if flips == best_value {
                best_moves.push(mv);
            }
        }

        let picked = best_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose greedy best move")?;

        out.info_lines
            .push(format!("info string greedy_engine flips {}", best_value));
        out.best_move = Some(*picked);
        out.best_score = Some(best_value as i32);
        Ok(out)
    }
}
