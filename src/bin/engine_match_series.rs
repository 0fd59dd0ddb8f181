//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `RUST_LOG=debug cargo run --release --bin engine_match_series`

use plum_draughts::engines::engine_minimax::MinimaxEngine;
use plum_draughts::engines::engine_options::{EngineOptions, RandomSeed};
use plum_draughts::engines::engine_trait::Engine;
use plum_draughts::search::board_scoring::ScoringMode;
use plum_draughts::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchError, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Customize these two lines to experiment with different scorers/depths.
    let player1 = || {
        Box::new(MinimaxEngine::new(EngineOptions {
            depth: 4,
            scoring: ScoringMode::NumberAndPotential,
            pruning: true,
            seed: RandomSeed::WallClock,
        })) as Box<dyn Engine>
    };
    let player2 = || {
        Box::new(MinimaxEngine::new(EngineOptions {
            depth: 4,
            scoring: ScoringMode::Number,
            pruning: true,
            seed: RandomSeed::WallClock,
        })) as Box<dyn Engine>
    };

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig { max_turns: 120 },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
