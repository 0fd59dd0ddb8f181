use crate::game_state::draughts_types::{Color, Grid, Square};
use crate::moves::move_descriptions::Move;

/// Moves available to a color or a single piece.
///
/// When `captures_available` is set every move is a capture, otherwise none is.
/// Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub captures_available: bool,
}

impl LegalMoves {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Resolves a from/to selection into the generated move, captured square
    /// included.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        let probe = Move::quiet(from, to);
        self.moves.iter().copied().find(|mv| *mv == probe)
    }

    /// Distinct source squares, for "which pieces may move" queries.
    pub fn sources(&self) -> Vec<Square> {
        let mut sources: Vec<Square> = self.moves.iter().map(|mv| mv.from).collect();
        sources.sort();
        sources.dedup();
        sources
    }

    /// Destinations reachable from `from`.
    pub fn destinations_from(&self, from: Square) -> Vec<Square> {
        self.moves
            .iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect()
    }
}

pub trait MoveGenerator: Send + Sync {
    /// Every legal move of `color` under the mandatory-capture rule.
    fn legal_moves_for_color(&self, grid: &Grid, color: Color) -> LegalMoves;

    /// Legal moves of the single piece on `square`; empty for an empty square.
    fn legal_moves_for_piece(&self, grid: &Grid, square: Square) -> LegalMoves;
}
