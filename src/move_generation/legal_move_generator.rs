//! Full legal move generation pipeline.
//!
//! Collects per-piece captures first and only falls back to quiet moves when
//! no piece of the side has a capture (mandatory capture).

use crate::game_state::draughts_types::*;
use crate::move_generation::legal_move_shared::squares_of;
use crate::move_generation::legal_moves_king::{generate_king_captures, generate_king_quiet_moves};
use crate::move_generation::legal_moves_man::{generate_man_captures, generate_man_quiet_moves};
use crate::move_generation::move_generator::{LegalMoves, MoveGenerator};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn legal_moves_for_color(&self, grid: &Grid, color: Color) -> LegalMoves {
        let mut captures = Vec::<Move>::with_capacity(16);
        for from in squares_of(grid, color) {
            generate_captures(grid, from, &mut captures);
        }
        if !captures.is_empty() {
            return LegalMoves {
                moves: captures,
                captures_available: true,
            };
        }

        let mut quiet = Vec::<Move>::with_capacity(32);
        for from in squares_of(grid, color) {
            generate_quiet_moves(grid, from, &mut quiet);
        }
        LegalMoves {
            moves: quiet,
            captures_available: false,
        }
    }

    fn legal_moves_for_piece(&self, grid: &Grid, square: Square) -> LegalMoves {
        let mut moves = Vec::<Move>::new();
        generate_captures(grid, square, &mut moves);
        if !moves.is_empty() {
            return LegalMoves {
                moves,
                captures_available: true,
            };
        }

        generate_quiet_moves(grid, square, &mut moves);
        LegalMoves {
            moves,
            captures_available: false,
        }
    }
}

fn generate_captures(grid: &Grid, from: Square, out: &mut Vec<Move>) {
    match cell_at(grid, from) {
        Cell::Man(color) => generate_man_captures(grid, from, color, out),
        Cell::King(color) => generate_king_captures(grid, from, color, out),
        Cell::Empty => {}
    }
}

fn generate_quiet_moves(grid: &Grid, from: Square, out: &mut Vec<Move>) {
    match cell_at(grid, from) {
        Cell::Man(color) => generate_man_quiet_moves(grid, from, color, out),
        Cell::King(_) => generate_king_quiet_moves(grid, from, out),
        Cell::Empty => {}
    }
}

#[cfg(test)]
mod tests {
    use super::LegalMoveGenerator;
    use crate::game_state::board_state::{grid_from_layout, BoardState};
    use crate::game_state::draughts_rules::starting_grid;
    use crate::game_state::draughts_types::*;
    use crate::move_generation::legal_move_apply::apply_move_to_grid;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn startpos_has_seven_moves_per_side() {
        let grid = starting_grid();
        let white = LegalMoveGenerator.legal_moves_for_color(&grid, Color::White);
        let black = LegalMoveGenerator.legal_moves_for_color(&grid, Color::Black);

        assert_eq!(white.len(), 7);
        assert_eq!(black.len(), 7);
        assert!(!white.captures_available);
        assert!(white.moves.iter().all(|mv| mv.from.row == 5 && mv.to.row == 4));
        assert!(black.moves.iter().all(|mv| mv.from.row == 2 && mv.to.row == 3));
    }

    #[test]
    fn single_capture_excludes_every_quiet_move() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "........",
            "..b.....",
            "...w....",
            "........",
            ".w...w..",
            "w.......",
        ])
        .expect("layout should parse");

        let moves = LegalMoveGenerator.legal_moves_for_color(&grid, Color::White);
        assert!(moves.captures_available);
        assert_eq!(moves.moves, vec![Move::capture(sq(4, 3), sq(2, 1), sq(3, 2))]);
        assert_eq!(moves.moves[0].captured, Some(sq(3, 2)));
    }

    #[test]
    fn captures_come_only_from_pieces_that_have_them() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "........",
            "..b...b.",
            "...w....",
            "......B.",
            ".....w..",
            "W.......",
        ])
        .expect("layout should parse");

        let moves = LegalMoveGenerator.legal_moves_for_color(&grid, Color::White);
        assert!(moves.captures_available);
        let sources = moves.sources();
        assert_eq!(sources, vec![sq(4, 3), sq(6, 5)]);
        assert!(moves.moves.iter().all(|mv| mv.is_capture()));
    }

    #[test]
    fn no_pieces_means_no_moves() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "w.......",
        ])
        .expect("layout should parse");

        assert!(LegalMoveGenerator
            .legal_moves_for_color(&grid, Color::Black)
            .is_empty());
    }

    #[test]
    fn blocked_side_has_no_moves() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "..b.....",
            ".b......",
            "w.......",
        ])
        .expect("layout should parse");

        assert!(LegalMoveGenerator
            .legal_moves_for_color(&grid, Color::White)
            .is_empty());
    }

    #[test]
    fn piece_query_continues_capture_chain() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "..b.b...",
            ".....w..",
            "........",
            "........",
            "........",
            "........",
        ])
        .expect("layout should parse");

        let first = LegalMoveGenerator.legal_moves_for_piece(&grid, sq(3, 5));
        let jump = first
            .find(sq(3, 5), sq(1, 3))
            .expect("jump over (2,4) should be legal");
        assert_eq!(jump.captured, Some(sq(2, 4)));

        let after = apply_move_to_grid(&grid, jump);
        let follow_up = LegalMoveGenerator.legal_moves_for_piece(&after, sq(1, 3));
        assert!(follow_up.captures_available);
        assert_eq!(follow_up.moves, vec![Move::capture(sq(1, 3), sq(3, 1), sq(2, 2))]);
    }

    #[test]
    fn piece_query_on_empty_square_is_empty() {
        let board = BoardState::new_game();
        let moves = LegalMoveGenerator.legal_moves_for_piece(board.grid(), sq(4, 1));
        assert!(moves.is_empty());
        assert!(!moves.captures_available);
    }

    #[test]
    fn mandatory_capture_holds_along_random_playouts() {
        use rand::rngs::StdRng;
        use rand::seq::IndexedRandom;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut grid = starting_grid();
            let mut color = Color::White;
            for _ in 0..80 {
                let legal = LegalMoveGenerator.legal_moves_for_color(&grid, color);
                let any_piece_captures = Square::all()
                    .filter(|s| cell_at(&grid, *s).is_color(color))
                    .any(|s| LegalMoveGenerator.legal_moves_for_piece(&grid, s).captures_available);
                assert_eq!(legal.captures_available, any_piece_captures);
                assert!(legal
                    .moves
                    .iter()
                    .all(|mv| mv.is_capture() == legal.captures_available));

                let Some(mv) = legal.moves.choose(&mut rng).copied() else {
                    break;
                };
                let kings_before: Vec<Square> = Square::all()
                    .filter(|s| cell_at(&grid, *s).is_king())
                    .collect();
                grid = apply_move_to_grid(&grid, mv);
                for king in kings_before {
                    let moved_to = if king == mv.from { mv.to } else { king };
                    if Some(king) != mv.captured {
                        assert!(cell_at(&grid, moved_to).is_king());
                    }
                }
                if let Cell::Man(c) = cell_at(&grid, mv.to) {
                    assert_ne!(mv.to.row, c.promotion_row());
                }
                color = color.opposite();
            }
        }
    }
}
