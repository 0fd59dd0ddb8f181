//! Turn-level perft for move-generation regression and benchmarking.
//!
//! One ply is a complete turn, so a capture chain counts once no matter how
//! many jumps it contains.

use crate::game_state::draughts_types::{cell_at, Color, Grid};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::legal_turns::generate_legal_turns;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub multi_captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.multi_captures += rhs.multi_captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, grid: &Grid, color: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generate_legal_turns(generator, grid, color) {
        if depth == 1 {
            total.nodes += 1;
            if generated.turn.iter().any(|mv| mv.is_capture()) {
                total.captures += 1;
            }
            if generated.turn.len() > 1 {
                total.multi_captures += 1;
            }
            if let (Some(first), Some(last)) = (generated.turn.first(), generated.turn.last()) {
                let before = cell_at(grid, first.from);
                let after = cell_at(&generated.grid_after_turn, last.to);
                if !before.is_king() && after.is_king() {
                    total.promotions += 1;
                }
            }
        } else {
            total.merge(perft(generator, &generated.grid_after_turn, color.opposite(), depth - 1));
        }
    }
    total
}

pub fn perft_legal(grid: &Grid, color: Color, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, grid, color, depth)
}
