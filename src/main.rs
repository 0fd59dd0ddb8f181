//! Headless bot-vs-bot game runner.
//!
//! Run with:
//! `cargo run --release -- Bot.WhiteBotLevel=4 Bot.BotScoringType=NumberAndPotential`
//! `RUST_LOG=debug cargo run --release -- Bot.NoRandom=true`

use std::process::ExitCode;

use plum_draughts::game_state::draughts_types::Color;
use plum_draughts::utils::engine_match_harness::{play_engine_match, MatchOutcome};
use plum_draughts::utils::game_settings::GameSettings;
use plum_draughts::utils::render_board::render_board;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match GameSettings::from_args(std::env::args().skip(1)) {
        Ok(settings) => settings,
        Err(err) => {
            error!(%err, "invalid settings");
            return ExitCode::from(2);
        }
    };

    let result = match play_engine_match(
        settings.build_engine(Color::White),
        settings.build_engine(Color::Black),
        settings.match_config(),
    ) {
        Ok(result) => result,
        Err(err) => {
            error!(%err, "game aborted");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", render_board(result.final_board.grid()));
    let verdict = match result.outcome {
        MatchOutcome::WhiteWins => "white wins",
        MatchOutcome::BlackWins => "black wins",
        MatchOutcome::DrawTurnLimit => "draw by turn limit",
    };
    println!(
        "{verdict} after {} turns in {} ms",
        result.played_turns.len(),
        result.duration_ms
    );
    ExitCode::SUCCESS
}
