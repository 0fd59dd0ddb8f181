use crate::game_state::draughts_types::Grid;

/// Single history record, pushed after every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub grid: Grid,
    /// Captures made so far in the turn this move belongs to (0 for quiet moves).
    pub beat_series: u8,
}
