//! Headless head-to-head engine games.
//!
//! This module plays two `Engine` implementations against each other on a
//! live `BoardState`, exactly the way an interactive game loop would: White
//! moves first, every returned turn is checked against the generator before
//! it is applied, and a side with no legal move loses.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardError;
use crate::game_state::draughts_types::{BoardState, Color};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{format_turn, Move, Turn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWins,
    BlackWins,
    DrawTurnLimit,
}

impl MatchOutcome {
    fn win_for(color: Color) -> Self {
        match color {
            Color::White => MatchOutcome::WhiteWins,
            Color::Black => MatchOutcome::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWins => Some(Color::White),
            MatchOutcome::BlackWins => Some(Color::Black),
            MatchOutcome::DrawTurnLimit => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{color} engine returned an illegal turn: {turn}")]
    IllegalTurn { color: Color, turn: String },

    #[error("board rejected a move: {0}")]
    Board(#[from] BoardError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Plies after which the game is declared drawn.
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_turns: 120 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: BoardState,
    pub played_turns: Vec<Turn>,
    pub white_turn_count: u32,
    pub black_turn_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    pub started_at: DateTime<Utc>,
    pub duration_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawTurnLimit,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
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
    pub player1_turns: u32,
    pub player2_turns: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_turn_time_ms(&self) -> f64 {
        avg_ms(self.player1_total_time_ns, self.player1_turns)
    }

    pub fn player2_avg_turn_time_ms(&self) -> f64 {
        avg_ms(self.player2_total_time_ns, self.player2_turns)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_turn_time_ms(),
            self.player2_avg_turn_time_ms()
        )
    }
}

fn avg_ms(total_ns: u128, turns: u32) -> f64 {
    if turns == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(turns) / 1_000_000.0
    }
}

/// Play one game from the starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchResult, MatchError> {
    play_engine_match_from_board(BoardState::new_game(), engine_white, engine_black, config)
}

/// Play one game from a caller-provided board, White to move.
pub fn play_engine_match_from_board(
    mut board: BoardState,
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    config: MatchConfig,
) -> Result<MatchResult, MatchError> {
    engine_white.new_game();
    engine_black.new_game();

    let generator = LegalMoveGenerator;
    let started_at = Utc::now();
    let mut played_turns = Vec::<Turn>::new();
    let mut white_turn_count = 0u32;
    let mut black_turn_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut outcome = MatchOutcome::DrawTurnLimit;

    for ply in 0..config.max_turns {
        let mover = if ply % 2 == 0 { Color::White } else { Color::Black };
        if generator
            .legal_moves_for_color(board.grid(), mover)
            .is_empty()
        {
            outcome = MatchOutcome::win_for(mover.opposite());
            break;
        }

        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_turn(&board, mover),
            Color::Black => engine_black.choose_turn(&board, mover),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_turn_count = white_turn_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_turn_count = black_turn_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        apply_checked_turn(&mut board, &generator, mover, &out.turn)?;
        debug!(
            ply,
            %mover,
            turn = %format_turn(&out.turn),
            elapsed_ms = (elapsed_ns / 1_000_000) as u64,
            "turn played"
        );
        played_turns.push(out.turn);
    }

    let duration_ms = (Utc::now() - started_at).num_milliseconds();
    info!(
        outcome = ?outcome,
        turns = played_turns.len(),
        white = engine_white.name(),
        black = engine_black.name(),
        duration_ms,
        "game finished"
    );

    Ok(MatchResult {
        outcome,
        final_board: board,
        played_turns,
        white_turn_count,
        black_turn_count,
        white_total_time_ns,
        black_total_time_ns,
        started_at,
        duration_ms,
    })
}

/// Applies `turn` move by move, resolving each step against the legal moves
/// of the moment. The turn must be complete: a chain may only stop when the
/// capturing piece has no further capture.
pub fn apply_checked_turn<G: MoveGenerator + ?Sized>(
    board: &mut BoardState,
    generator: &G,
    color: Color,
    turn: &[Move],
) -> Result<(), MatchError> {
    let illegal = || MatchError::IllegalTurn {
        color,
        turn: format_turn(turn),
    };

    let mut legal = generator.legal_moves_for_color(board.grid(), color);
    let mut beat_series = 0u8;
    let mut chain_open = true;
    for mv in turn {
        if !chain_open {
            return Err(illegal());
        }
        let resolved = legal.find(mv.from, mv.to).ok_or_else(illegal)?;
        beat_series = beat_series.saturating_add(u8::from(resolved.is_capture()));
        board.apply(resolved, beat_series)?;

        legal = generator.legal_moves_for_piece(board.grid(), resolved.to);
        chain_open = resolved.is_capture() && legal.captures_available;
    }

    if chain_open {
        return Err(illegal());
    }
    Ok(())
}

/// Play a series of games and aggregate win/loss/draw statistics.
///
/// Player colors are drawn per game from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, MatchError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed);

    for game in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let result = if player1_is_white {
            play_engine_match(player1_factory(), player2_factory(), config.per_game)?
        } else {
            play_engine_match(player2_factory(), player1_factory(), config.per_game)?
        };

        let (p1_turns, p1_ns, p2_turns, p2_ns) = if player1_is_white {
            (
                result.white_turn_count,
                result.white_total_time_ns,
                result.black_turn_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_turn_count,
                result.black_total_time_ns,
                result.white_turn_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_turns = stats.player1_turns.saturating_add(p1_turns);
        stats.player2_turns = stats.player2_turns.saturating_add(p2_turns);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome.winner() {
            Some(color) => {
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawTurnLimit
            }
        };
        stats.outcomes.push(mapped);
        info!(
            game = game + 1,
            games = config.games,
            result = ?mapped,
            p1_wins = stats.player1_wins,
            p2_wins = stats.player2_wins,
            draws = stats.draws,
            "series game finished"
        );
    }

    Ok(stats)
}
