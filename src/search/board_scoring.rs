//! Pluggable position evaluation.
//!
//! Scores are non-negative material ratios from the favored side's point of
//! view: 1.0 is level, `WIN_SCORE` means the opponent has no pieces left and
//! 0.0 means the favored side has none.

use std::fmt;
use std::str::FromStr;

use crate::game_state::draughts_types::*;

/// Stands in for infinity; dominates every finite ratio.
pub const WIN_SCORE: f64 = 1e9;

/// Bonus per row a man has advanced from its own back rank.
pub const ADVANCEMENT_BONUS: f64 = 0.05;

pub trait BoardScorer: Send + Sync {
    fn score(&self, grid: &Grid, favored: Color) -> f64;
}

/// Plain material ratio, kings worth four men.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub const KING_WEIGHT: f64 = 4.0;
}

impl BoardScorer for MaterialScorer {
    fn score(&self, grid: &Grid, favored: Color) -> f64 {
        let ours = count_pieces(grid, favored);
        let theirs = count_pieces(grid, favored.opposite());
        ratio(
            ours.men as f64,
            ours.kings as f64,
            theirs.men as f64,
            theirs.kings as f64,
            Self::KING_WEIGHT,
        )
    }
}

/// Material ratio where men also earn credit for advancing, kings worth five.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialAndPotentialScorer;

impl MaterialAndPotentialScorer {
    pub const KING_WEIGHT: f64 = 5.0;

    fn weighted_men(grid: &Grid, color: Color) -> f64 {
        let mut men = 0.0;
        for square in Square::all() {
            if cell_at(grid, square) == Cell::Man(color) {
                men += 1.0 + ADVANCEMENT_BONUS * rows_advanced(square, color) as f64;
            }
        }
        men
    }
}

impl BoardScorer for MaterialAndPotentialScorer {
    fn score(&self, grid: &Grid, favored: Color) -> f64 {
        let opponent = favored.opposite();
        ratio(
            Self::weighted_men(grid, favored),
            count_pieces(grid, favored).kings as f64,
            Self::weighted_men(grid, opponent),
            count_pieces(grid, opponent).kings as f64,
            Self::KING_WEIGHT,
        )
    }
}

#[inline]
fn rows_advanced(square: Square, color: Color) -> i8 {
    match color {
        Color::White => BOARD_SIZE - 1 - square.row,
        Color::Black => square.row,
    }
}

fn ratio(men: f64, kings: f64, opp_men: f64, opp_kings: f64, king_weight: f64) -> f64 {
    if opp_men + opp_kings == 0.0 {
        return WIN_SCORE;
    }
    if men + kings == 0.0 {
        return 0.0;
    }
    (men + kings * king_weight) / (opp_men + opp_kings * king_weight)
}

/// Evaluation strategy selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    #[default]
    Number,
    NumberAndPotential,
}

impl BoardScorer for ScoringMode {
    fn score(&self, grid: &Grid, favored: Color) -> f64 {
        match self {
            ScoringMode::Number => MaterialScorer.score(grid, favored),
            ScoringMode::NumberAndPotential => MaterialAndPotentialScorer.score(grid, favored),
        }
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Number" => Ok(ScoringMode::Number),
            "NumberAndPotential" => Ok(ScoringMode::NumberAndPotential),
            other => Err(format!("unknown scoring mode '{other}'")),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Number => write!(f, "Number"),
            ScoringMode::NumberAndPotential => write!(f, "NumberAndPotential"),
        }
    }
}
