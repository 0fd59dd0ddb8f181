//! Diagonal ray helpers shared by man and king move generation.

use crate::game_state::draughts_types::Square;

/// The four diagonal directions as `(d_row, d_col)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares along one diagonal from `from` (exclusive) to the board edge.
#[inline]
pub fn diagonal_ray(from: Square, direction: (i8, i8)) -> DiagonalRay {
    DiagonalRay {
        current: from,
        direction,
    }
}

#[derive(Debug, Clone)]
pub struct DiagonalRay {
    current: Square,
    direction: (i8, i8),
}

impl Iterator for DiagonalRay {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current.offset(self.direction.0, self.direction.1)?;
        self.current = next;
        Some(next)
    }
}
