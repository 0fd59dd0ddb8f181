//! Live board state with its undo history.
//!
//! `BoardState` owns the grid the game is played on and a history stack with
//! one entry per applied move. The search never touches it; it only reads a
//! copy of the grid.

use crate::game_state::draughts_rules::starting_grid;
use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("destination {0} is not empty")]
    DestinationOccupied(Square),

    #[error("source {0} is empty")]
    SourceEmpty(Square),

    #[error("no opposing piece on {0} to capture")]
    NothingToCapture(Square),

    #[error("piece on {0} cannot be promoted")]
    CannotPromote(Square),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

#[derive(Debug, Clone)]
pub struct BoardState {
    grid: Grid,
    history: Vec<HistoryEntry>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl BoardState {
    /// Standard starting position with its initial history snapshot.
    pub fn new_game() -> Self {
        Self::from_grid(starting_grid())
    }

    /// Arbitrary position; the grid becomes the initial history snapshot.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            history: vec![HistoryEntry {
                grid,
                beat_series: 0,
            }],
        }
    }

    /// Parses eight rows of `.`, `w`, `b`, `W`, `B`, row 0 first.
    pub fn from_layout(rows: &[&str; 8]) -> Result<Self, BoardError> {
        Ok(Self::from_grid(grid_from_layout(rows)?))
    }

    /// Back to the starting layout with a fresh history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current grid.
    #[inline]
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        cell_at(&self.grid, square)
    }

    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Applies one move and records it with `beat_series` captures so far in
    /// the current turn. The board is left untouched on error.
    pub fn apply(&mut self, mv: Move, beat_series: u8) -> Result<(), BoardError> {
        self.grid = apply_move(&self.grid, mv)?;
        self.push_history(beat_series);
        Ok(())
    }

    /// Applies a whole turn, numbering captures the way the game loop does.
    ///
    /// Moves applied before a failing one stay applied; callers validate turns
    /// against the generator first.
    pub fn apply_turn(&mut self, turn: &[Move]) -> Result<(), BoardError> {
        let mut beat_series = 0u8;
        for mv in turn {
            beat_series = beat_series.saturating_add(u8::from(mv.is_capture()));
            self.apply(*mv, beat_series)?;
        }
        Ok(())
    }

    /// Plain relocation with promotion, no capture handling.
    pub fn move_piece(&mut self, from: Square, to: Square, beat_series: u8) -> Result<(), BoardError> {
        self.apply(Move::quiet(from, to), beat_series)
    }

    /// Clears a square. Not recorded in history.
    pub fn drop_piece(&mut self, square: Square) {
        set_cell(&mut self.grid, square, Cell::Empty);
    }

    /// Crowns the man on `square`. Not recorded in history.
    pub fn promote(&mut self, square: Square) -> Result<(), BoardError> {
        match self.cell(square) {
            Cell::Man(color) => {
                set_cell(&mut self.grid, square, Cell::King(color));
                Ok(())
            }
            _ => Err(BoardError::CannotPromote(square)),
        }
    }

    /// Rolls back the most recent turn (a whole capture chain at once).
    ///
    /// Returns how many history entries were removed; the initial snapshot is
    /// never removed.
    pub fn undo(&mut self) -> usize {
        let to_remove = self
            .history
            .last()
            .map(|entry| entry.beat_series.max(1) as usize)
            .unwrap_or(1);

        let mut removed = 0;
        while removed < to_remove && self.history.len() > 1 {
            self.history.pop();
            removed += 1;
        }

        if let Some(entry) = self.history.last() {
            self.grid = entry.grid;
        }
        removed
    }

    fn push_history(&mut self, beat_series: u8) {
        self.history.push(HistoryEntry {
            grid: self.grid,
            beat_series,
        });
    }
}

pub fn grid_from_layout(rows: &[&str; 8]) -> Result<Grid, BoardError> {
    let mut grid = EMPTY_GRID;
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != BOARD_SIZE as usize {
            return Err(BoardError::InvalidLayout(format!(
                "row {row} has {} cells",
                cells.len()
            )));
        }
        for (col, c) in cells.into_iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| {
                BoardError::InvalidLayout(format!("unexpected '{c}' at row {row} col {col}"))
            })?;
            grid[row][col] = cell;
        }
    }
    Ok(grid)
}

pub fn grid_to_layout(grid: &Grid) -> Vec<String> {
    grid.iter()
        .map(|row| row.iter().map(|cell| cell.to_char()).collect())
        .collect()
}
