//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --depth1 4 --heuristic1 corners --depth2 2 --heuristic2 mobility --games 20 --verbose`

use othello_engine::engines::engine_minimax::MinimaxEngine;
use othello_engine::engines::engine_trait::Engine;
use othello_engine::search::alpha_beta::SearchConfig;
use othello_engine::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

struct SeriesArgs {
    depth1: String,
    heuristic1: String,
    depth2: String,
    heuristic2: String,
    games: u16,
    seed: u64,
    verbose: bool,
}

impl Default for SeriesArgs {
    fn default() -> Self {
        Self {
            depth1: "3".to_owned(),
            heuristic1: "disc-difference".to_owned(),
            depth2: "3".to_owned(),
            heuristic2: "mobility".to_owned(),
            games: 10,
            seed: 1234,
            verbose: false,
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<SeriesArgs, String> {
    let mut parsed = SeriesArgs::default();
    while let Some(flag) = args.next() {
        if flag == "--verbose" || flag == "-v" {
            parsed.verbose = true;
            continue;
        }

        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--depth1" => parsed.depth1 = value,
            "--heuristic1" => parsed.heuristic1 = value,
            "--depth2" => parsed.depth2 = value,
            "--heuristic2" => parsed.heuristic2 = value,
            "--games" => {
                parsed.games = value
                    .parse()
                    .map_err(|_| format!("invalid game count: {value}"))?
            }
            "--seed" => {
                parsed.seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {value}"))?
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(parsed)
}

fn main() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;

    let config1 =
        SearchConfig::parse(&args.depth1, &args.heuristic1).map_err(|e| e.to_string())?;
    let config2 =
        SearchConfig::parse(&args.depth2, &args.heuristic2).map_err(|e| e.to_string())?;
    println!(
        "player1: depth {} {} | player2: depth {} {}",
        config1.depth, config1.heuristic, config2.depth, config2.heuristic
    );

    let player1 = move || Box::new(MinimaxEngine::new(config1)) as Box<dyn Engine>;
    let player2 = move || Box::new(MinimaxEngine::new(config2)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                opening_min_plies: 0,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
            verbose: args.verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
