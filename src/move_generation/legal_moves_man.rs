use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_shared::{is_empty_on, is_opponent_on};
use crate::moves::diagonal_rays::DIAGONALS;
use crate::moves::move_descriptions::Move;

/// Short jumps over an adjacent opposing piece, in all four directions.
pub fn generate_man_captures(grid: &Grid, from: Square, color: Color, out: &mut Vec<Move>) {
    for (d_row, d_col) in DIAGONALS {
        let Some(jumped) = from.offset(d_row, d_col) else {
            continue;
        };
        let Some(landing) = from.offset(2 * d_row, 2 * d_col) else {
            continue;
        };
        if is_empty_on(grid, landing) && is_opponent_on(grid, jumped, color) {
            out.push(Move::capture(from, landing, jumped));
        }
    }
}

/// One diagonal step toward the promotion row.
pub fn generate_man_quiet_moves(grid: &Grid, from: Square, color: Color, out: &mut Vec<Move>) {
    let d_row = color.forward_step();
    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if is_empty_on(grid, to) {
            out.push(Move::quiet(from, to));
        }
    }
}
