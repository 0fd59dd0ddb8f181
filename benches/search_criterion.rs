use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_draughts::game_state::draughts_rules::starting_grid;
use plum_draughts::game_state::draughts_types::Color;
use plum_draughts::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_draughts::move_generation::legal_turns::generate_legal_turns;
use plum_draughts::search::board_scoring::ScoringMode;
use plum_draughts::search::minimax::{find_best_turn, SearchConfig};

const DEPTHS: &[u8] = &[1, 2, 3, 4];

fn bench_search(c: &mut Criterion) {
    let grid = starting_grid();
    let legal: Vec<_> = generate_legal_turns(&LegalMoveGenerator, &grid, Color::White)
        .into_iter()
        .map(|generated| generated.turn)
        .collect();

    let mut group = c.benchmark_group("minimax_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for &depth in DEPTHS {
        for pruning in [false, true] {
            for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
                let config = SearchConfig {
                    max_depth: depth,
                    pruning,
                };

                // Correctness guard before benchmarking.
                let mut rng = StdRng::seed_from_u64(0);
                let warmup =
                    find_best_turn(&grid, Color::White, &LegalMoveGenerator, &mode, &mut rng, config);
                assert!(
                    legal.contains(&warmup.turn),
                    "illegal turn at depth {depth} pruning {pruning}"
                );

                let label = if pruning { "ab" } else { "full" };
                let bench_name = format!("{mode}_{label}_d{depth}");
                group.bench_with_input(BenchmarkId::from_parameter(bench_name), &config, |b, config| {
                    b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(0);
                        let result = find_best_turn(
                            black_box(&grid),
                            Color::White,
                            &LegalMoveGenerator,
                            &mode,
                            &mut rng,
                            *config,
                        );
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
