use crate::game_state::draughts_types::*;
use crate::moves::diagonal_rays::{diagonal_ray, DIAGONALS};
use crate::moves::move_descriptions::Move;

/// Flying captures: along each diagonal the first opposing piece may be jumped
/// onto any empty square behind it, up to the next occupied square.
pub fn generate_king_captures(grid: &Grid, from: Square, color: Color, out: &mut Vec<Move>) {
    for direction in DIAGONALS {
        let mut jumped: Option<Square> = None;
        for square in diagonal_ray(from, direction) {
            match cell_at(grid, square).color() {
                Some(c) if c == color => break,
                Some(_) if jumped.is_some() => break,
                Some(_) => jumped = Some(square),
                None => {
                    if let Some(captured) = jumped {
                        out.push(Move::capture(from, square, captured));
                    }
                }
            }
        }
    }
}

/// Slides to every empty square along each diagonal until blocked.
pub fn generate_king_quiet_moves(grid: &Grid, from: Square, out: &mut Vec<Move>) {
    for direction in DIAGONALS {
        for square in diagonal_ray(from, direction) {
            if !cell_at(grid, square).is_empty() {
                break;
            }
            out.push(Move::quiet(from, square));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_king_captures, generate_king_quiet_moves};
    use crate::game_state::board_state::grid_from_layout;
    use crate::game_state::draughts_types::*;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn king_lands_anywhere_behind_captured_piece() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "..b.....",
            "........",
            "W.......",
        ])
        .expect("layout should parse");

        let mut out = Vec::new();
        generate_king_captures(&grid, sq(7, 0), Color::White, &mut out);
        assert_eq!(
            out,
            vec![
                Move::capture(sq(7, 0), sq(4, 3), sq(5, 2)),
                Move::capture(sq(7, 0), sq(3, 4), sq(5, 2)),
                Move::capture(sq(7, 0), sq(2, 5), sq(5, 2)),
                Move::capture(sq(7, 0), sq(1, 6), sq(5, 2)),
                Move::capture(sq(7, 0), sq(0, 7), sq(5, 2)),
            ]
        );
        assert!(out.iter().all(|mv| mv.captured == Some(sq(5, 2))));
    }

    #[test]
    fn king_capture_stops_at_second_piece() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            ".....b..",
            "........",
            "...b....",
            "........",
            ".B......",
            "........",
        ])
        .expect("layout should parse");

        let mut out = Vec::new();
        generate_king_captures(&grid, sq(6, 1), Color::Black, &mut out);
        assert!(out.is_empty(), "own pieces cannot be captured");

        let grid = grid_from_layout(&[
            "........",
            "........",
            ".....b..",
            "........",
            "...b....",
            "........",
            ".W......",
            "........",
        ])
        .expect("layout should parse");

        out.clear();
        generate_king_captures(&grid, sq(6, 1), Color::White, &mut out);
        assert_eq!(out, vec![Move::capture(sq(6, 1), sq(3, 4), sq(4, 3))]);
    }

    #[test]
    fn king_cannot_jump_two_adjacent_pieces() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "........",
            "....b...",
            "...b....",
            "........",
            ".W......",
            "........",
        ])
        .expect("layout should parse");

        let mut out = Vec::new();
        generate_king_captures(&grid, sq(6, 1), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn king_slides_until_blocked() {
        let grid = grid_from_layout(&[
            "........",
            "........",
            "........",
            "........",
            "...W....",
            "....w...",
            "........",
            "........",
        ])
        .expect("layout should parse");

        let mut out = Vec::new();
        generate_king_quiet_moves(&grid, sq(4, 3), &mut out);
        // 3 + 4 + 3 squares on the open diagonals, blocked down-right.
        assert_eq!(out.len(), 10);
        assert!(!out.contains(&Move::quiet(sq(4, 3), sq(5, 4))));
        assert!(out.contains(&Move::quiet(sq(4, 3), sq(0, 7))));
    }
}
