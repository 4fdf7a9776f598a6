//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any UI, with
//! an optional seeded random opening prefix. The game value is threaded
//! through the loop explicitly; forced passes are played automatically.

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::{Game, Outcome};
use crate::game_state::othello_types::Color;
use crate::utils::notation::move_log_entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: Outcome,
    pub final_state: Game,
    pub started_at: DateTime<Local>,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub black_move_count: u32,
    pub white_move_count: u32,
    pub black_total_time_ns: u128,
    pub white_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_discs: u32,
    pub player2_discs: u32,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_discs={} p2_discs={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_discs,
            self.player2_discs,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play a single seeded match from the standard start.
///
/// `engine_black` moves first.
pub fn play_engine_match(
    mut engine_black: Box<dyn Engine>,
    mut engine_white: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_from_state(
        Game::new(),
        engine_black.as_mut(),
        engine_white.as_mut(),
        seed,
        &config,
    )
}

/// Play a match from a caller-provided game.
pub fn play_engine_match_from_state(
    mut game: Game,
    engine_black: &mut dyn Engine,
    engine_white: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let started_at = Local::now();
    engine_black.new_game();
    engine_white.new_game();

    let opening_moves = apply_seeded_random_opening(
        &mut game,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut played_moves = Vec::<String>::new();
    let mut black_move_count = 0u32;
    let mut white_move_count = 0u32;
    let mut black_total_time_ns = 0u128;
    let mut white_total_time_ns = 0u128;

    while !game.is_over() {
        let legal_moves = game.legal_moves();
        if legal_moves.is_empty() {
            game.pass().map_err(|e| e.to_string())?;
            continue;
        }

        let mover = game.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::Black => engine_black.choose_move(&game, &config.go_params)?,
            Color::White => engine_white.choose_move(&game, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_move
            .ok_or_else(|| format!("engine passed for {mover} with legal moves available"))?;
        if !legal_moves.contains(&chosen) {
            return Err(format!("engine returned illegal move {chosen} for {mover}"));
        }

        played_moves.push(move_log_entry(mover, chosen));
        game.play(chosen).map_err(|e| e.to_string())?;
    }

    let (black, white) = game.board.score();
    Ok(MatchResult {
        outcome: Outcome::from_score(black, white),
        final_state: game,
        started_at,
        opening_moves,
        played_moves,
        black_move_count,
        white_move_count,
        black_total_time_ns,
        white_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_black = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (black, white) = if player1_is_black {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} black={} white={}",
                i + 1,
                config.games,
                seed,
                black,
                white
            );
        }

        let result = if player1_is_black {
            play_engine_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )?
        };

        let (black_discs, white_discs) = result.final_state.board.score();
        let (p1_color, p1_discs, p2_discs, p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_black {
            (
                Color::Black,
                black_discs,
                white_discs,
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            )
        } else {
            (
                Color::White,
                white_discs,
                black_discs,
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            )
        };

        stats.player1_discs = stats.player1_discs.saturating_add(p1_discs);
        stats.player2_discs = stats.player2_discs.saturating_add(p2_discs);
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_color = match result.outcome {
            Outcome::BlackWins => Some(Color::Black),
            Outcome::WhiteWins => Some(Color::White),
            Outcome::Draw => None,
        };
        let mapped = match winner_color {
            Some(color) if color == p1_color => {
                stats.player1_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player1,
                    color,
                }
            }
            Some(color) => {
                stats.player2_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player2,
                    color,
                }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} started={} result={:?} score={}-{} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                result.started_at.format("%Y-%m-%d %H:%M:%S"),
                mapped,
                black_discs,
                white_discs,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    game: &mut Game,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<Vec<String>, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = game.legal_moves();
        if legal_moves.is_empty() {
            break;
        }

        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves.push(move_log_entry(game.side_to_move, chosen));
        game.play(chosen).map_err(|e| e.to_string())?;
    }

    Ok(opening_moves)
}

#[cfg(test)]
mod tests {
    use super::{
        play_engine_match, play_engine_match_from_state, play_engine_match_series, MatchConfig,
        MatchSeriesConfig, SeriesOutcome,
    };
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
    use crate::game_state::game_state::{Game, Outcome};
    use crate::game_state::othello_types::Move;
    use crate::search::alpha_beta::SearchConfig;
    use crate::search::board_scoring::Heuristic;

    struct CornerGrabber;

    impl Engine for CornerGrabber {
        fn name(&self) -> &str {
            "corner grabber"
        }

        fn choose_move(&mut self, _game: &Game, _params: &GoParams) -> Result<EngineOutput, String> {
            Ok(EngineOutput {
                best_move: Some(Move::new(0, 0).map_err(|e| e.to_string())?),
                ..EngineOutput::default()
            })
        }
    }

    #[test]
    fn engine_match_harness_runs_random_vs_greedy() {
        let black = Box::new(RandomEngine::seeded(1));
        let white = Box::new(GreedyEngine::seeded(2));
        let result = play_engine_match(
            black,
            white,
            42,
            MatchConfig {
                opening_min_plies: 2,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!(result.opening_moves.len() >= 2);
        assert!(result.final_state.is_over());
        assert!(result.black_move_count + result.white_move_count > 0);

        let (black, white) = result.final_state.board.score();
        assert_eq!(result.outcome, Outcome::from_score(black, white));
        assert_eq!(
            result.opening_moves.len() + result.played_moves.len(),
            result.final_state.placements()
        );
    }

    #[test]
    fn series_aggregates_every_game() {
        let stats = play_engine_match_series(
            || {
                let config = SearchConfig::new(3, Heuristic::DiscDifference).expect("valid config");
                Box::new(MinimaxEngine::seeded(config, 9)) as Box<dyn Engine>
            },
            || Box::new(RandomEngine::seeded(10)) as Box<dyn Engine>,
            MatchSeriesConfig {
                games: 4,
                base_seed: 777,
                per_game: MatchConfig {
                    opening_min_plies: 0,
                    opening_max_plies: 2,
                    ..MatchConfig::default()
                },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 4);
        assert_eq!(stats.outcomes.len(), 4);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 4);
        assert!(stats.player1_avg_move_time_ms >= 0.0);
        assert!(stats
            .outcomes
            .iter()
            .all(|o| matches!(o, SeriesOutcome::PlayerWin { .. } | SeriesOutcome::Draw)));
        assert!(stats.report().starts_with("games=4"));
    }

    #[test]
    fn asymmetric_configs_play_to_completion() {
        let mut black = MinimaxEngine::seeded(
            SearchConfig::new(2, Heuristic::CornerControl).expect("valid config"),
            1,
        );
        let mut white = MinimaxEngine::seeded(
            SearchConfig::new(1, Heuristic::Mobility).expect("valid config"),
            2,
        );

        let result = play_engine_match_from_state(
            Game::new(),
            &mut black,
            &mut white,
            5,
            &MatchConfig {
                opening_min_plies: 0,
                opening_max_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!(result.opening_moves.is_empty());
        assert!(result.final_state.is_over());
        assert!(result.played_moves[0].starts_with("X: "));
    }

    #[test]
    fn illegal_engine_move_is_reported() {
        let err = play_engine_match(
            Box::new(CornerGrabber),
            Box::new(RandomEngine::seeded(4)),
            1,
            MatchConfig {
                opening_min_plies: 0,
                opening_max_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect_err("corner is illegal on move one");
        assert!(err.contains("illegal move 1a"));
    }
}
