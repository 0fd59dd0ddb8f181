use crate::game_state::draughts_types::*;

/// True when `square` holds a piece of the color opposing `mover`.
#[inline]
pub fn is_opponent_on(grid: &Grid, square: Square, mover: Color) -> bool {
    cell_at(grid, square).is_color(mover.opposite())
}

#[inline]
pub fn is_empty_on(grid: &Grid, square: Square) -> bool {
    cell_at(grid, square).is_empty()
}

/// Squares holding pieces of `color`, row-major.
pub fn squares_of(grid: &Grid, color: Color) -> impl Iterator<Item = Square> + '_ {
    Square::all().filter(move |square| cell_at(grid, *square).is_color(color))
}
