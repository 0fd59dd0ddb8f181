//! Expansion of legal moves into complete turns.
//!
//! A capture is only the first step of a turn when the capturing piece can
//! keep capturing from its landing square; this walks every such chain.

use crate::game_state::draughts_types::{Color, Grid};
use crate::move_generation::legal_move_apply::apply_move_to_grid;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, Turn};

/// A complete turn together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedTurn {
    pub turn: Turn,
    pub grid_after_turn: Grid,
}

/// Every complete turn available to `color`.
pub fn generate_legal_turns<G: MoveGenerator + ?Sized>(
    generator: &G,
    grid: &Grid,
    color: Color,
) -> Vec<GeneratedTurn> {
    let legal = generator.legal_moves_for_color(grid, color);
    let mut out = Vec::with_capacity(legal.len());
    for mv in legal.moves {
        let next = apply_move_to_grid(grid, mv);
        if legal.captures_available {
            extend_chain(generator, &next, vec![mv], &mut out);
        } else {
            out.push(GeneratedTurn {
                turn: vec![mv],
                grid_after_turn: next,
            });
        }
    }
    out
}

fn extend_chain<G: MoveGenerator + ?Sized>(
    generator: &G,
    grid: &Grid,
    chain: Vec<Move>,
    out: &mut Vec<GeneratedTurn>,
) {
    let Some(last) = chain.last().copied() else {
        return;
    };
    let follow_up = generator.legal_moves_for_piece(grid, last.to);
    if !follow_up.captures_available {
        out.push(GeneratedTurn {
            turn: chain,
            grid_after_turn: *grid,
        });
        return;
    }

    for mv in follow_up.moves {
        let mut extended = chain.clone();
        extended.push(mv);
        extend_chain(generator, &apply_move_to_grid(grid, mv), extended, out);
    }
}
