use crate::game_state::board_state::BoardError;
use crate::game_state::draughts_types::*;
use crate::moves::move_descriptions::Move;

/// Applies a move to a copy of `grid`: removes the jumped piece, promotes a
/// man reaching its far rank, relocates the piece.
///
/// Performs no validation; callers pass moves produced by the generator.
#[inline]
pub fn apply_move_to_grid(grid: &Grid, mv: Move) -> Grid {
    let mut next = *grid;
    if let Some(captured) = mv.captured {
        set_cell(&mut next, captured, Cell::Empty);
    }
    let moving = promoted_on_landing(cell_at(&next, mv.from), mv.to);
    set_cell(&mut next, mv.to, moving);
    set_cell(&mut next, mv.from, Cell::Empty);
    next
}

/// Checked variant of [`apply_move_to_grid`]: the source must hold a piece,
/// the destination must be empty and a captured square must hold an opposing
/// piece. On error nothing is produced.
pub fn apply_move(grid: &Grid, mv: Move) -> Result<Grid, BoardError> {
    let Some(color) = cell_at(grid, mv.from).color() else {
        return Err(BoardError::SourceEmpty(mv.from));
    };
    if !cell_at(grid, mv.to).is_empty() {
        return Err(BoardError::DestinationOccupied(mv.to));
    }
    if let Some(captured) = mv.captured {
        if cell_at(grid, captured).color() != Some(color.opposite()) {
            return Err(BoardError::NothingToCapture(captured));
        }
    }
    Ok(apply_move_to_grid(grid, mv))
}

#[inline]
fn promoted_on_landing(cell: Cell, to: Square) -> Cell {
    match cell {
        Cell::Man(color) if to.row == color.promotion_row() => Cell::King(color),
        other => other,
    }
}
