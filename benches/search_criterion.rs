use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use othello_engine::game_state::board::Board;
use othello_engine::game_state::othello_types::Color;
use othello_engine::search::alpha_beta::{search_with_config, SearchConfig};
use othello_engine::search::board_scoring::Heuristic;
use othello_engine::search::tie_break::FirstCandidate;

const MIDGAME: [&str; 8] = [
    "........",
    "........",
    "..XO.O..",
    "..XXXO..",
    "..OXOX..",
    "...O.X..",
    "........",
    "........",
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    let positions = [
        ("start", Board::new_game()),
        (
            "midgame",
            Board::from_rows(&MIDGAME).expect("benchmark diagram should parse"),
        ),
    ];

    for (position_name, board) in positions {
        for heuristic in Heuristic::ALL {
            for depth in [2u8, 4, 5] {
                let config = SearchConfig {
                    depth,
                    heuristic,
                    ..SearchConfig::default()
                };
                let id = format!("{position_name}_{heuristic}_d{depth}");
                group.bench_with_input(BenchmarkId::from_parameter(id), &config, |b, config| {
                    b.iter(|| {
                        let result = search_with_config(
                            black_box(&board),
                            Color::Black,
                            config,
                            &mut FirstCandidate,
                        )
                        .expect("search should run");
                        black_box(result.nodes)
                    });
                });
            }
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
