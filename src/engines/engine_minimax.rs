//! Alpha-beta search engine: the configurable computer player.
//!
//! Each instance carries its own `SearchConfig`, so two engines in one match
//! can run at different depths and with different heuristics.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::Game;
use crate::search::alpha_beta::{search_with_config, SearchConfig};
use crate::search::tie_break::{RandomTieBreak, TieBreak};

pub struct MinimaxEngine<T: TieBreak = RandomTieBreak<StdRng>> {
    config: SearchConfig,
    tie_break: T,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_tie_break(config, RandomTieBreak::new(StdRng::from_os_rng()))
    }

    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        Self::with_tie_break(config, RandomTieBreak::seeded(seed))
    }
}

impl<T: TieBreak> MinimaxEngine<T> {
    pub fn with_tie_break(config: SearchConfig, tie_break: T) -> Self {
        Self { config, tie_break }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<T: TieBreak> Engine for MinimaxEngine<T> {
    fn name(&self) -> &str {
        "Othello Minimax"
    }

    fn choose_move(&mut self, game: &Game, params: &GoParams) -> Result<EngineOutput, String> {
        let mut config = self.config;
        if let Some(depth) = params.depth {
            config.depth = depth;
        }

        let result =
            search_with_config(&game.board, game.side_to_move, &config, &mut self.tie_break)
                .map_err(|e| e.to_string())?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            best_score: Some(result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} candidates {}",
            config.depth, result.best_score, result.nodes, result.candidates
        ));
        out.info_lines.push(format!(
            "info string minimax_engine heuristic {} perspective {:?}",
            config.heuristic, config.perspective
        ));
        if params.depth.is_some() {
            out.info_lines.push(format!(
                "info string minimax_engine configured_depth {}",
                self.config.depth
            ));
        }

        Ok(out)
    }
}
