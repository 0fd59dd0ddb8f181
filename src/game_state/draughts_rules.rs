//! Canonical draughts-rule constants.
//!
//! Stores the starting layout and builds the starting grid from it.

use crate::game_state::draughts_types::*;

/// Starting position, row 0 first. `b` Black man, `w` White man.
pub const STARTING_LAYOUT: [&str; 8] = [
    ".b.b.b.b",
    "b.b.b.b.",
    ".b.b.b.b",
    "........",
    "........",
    "w.w.w.w.",
    ".w.w.w.w",
    "w.w.w.w.",
];

/// Rows filled with men at the start of a game, per side.
pub const STARTING_ROWS_PER_SIDE: i8 = 3;

/// Builds the starting grid: men on the dark squares of the three back rows.
pub fn starting_grid() -> Grid {
    let mut grid = EMPTY_GRID;
    for square in Square::all().filter(|s| s.is_dark()) {
        if square.row < STARTING_ROWS_PER_SIDE {
            set_cell(&mut grid, square, Cell::Man(Color::Black));
        } else if square.row >= BOARD_SIZE - STARTING_ROWS_PER_SIDE {
            set_cell(&mut grid, square, Cell::Man(Color::White));
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_state::grid_from_layout;

    #[test]
    fn starting_grid_matches_layout_constant() {
        let parsed = grid_from_layout(&STARTING_LAYOUT).expect("layout should parse");
        assert_eq!(parsed, starting_grid());
    }

    #[test]
    fn starting_grid_has_twelve_men_per_side() {
        let grid = starting_grid();
        assert_eq!(count_pieces(&grid, Color::White), PieceCounts { men: 12, kings: 0 });
        assert_eq!(count_pieces(&grid, Color::Black), PieceCounts { men: 12, kings: 0 });
    }
}
