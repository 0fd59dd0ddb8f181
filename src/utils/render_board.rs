//! Terminal-oriented Unicode board renderer.
//!
//! Rows are printed top to bottom starting with row 0, columns left to right,
//! each labelled with its index.

use crate::game_state::draughts_types::*;

pub fn render_board(grid: &Grid) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");
    for square in Square::all() {
        if square.col == 0 {
            out.push(char::from(b'0' + square.row as u8));
            out.push(' ');
        }

        out.push(cell_to_unicode(cell_at(grid, square), square));

        if square.col < BOARD_SIZE - 1 {
            out.push(' ');
        } else {
            out.push(' ');
            out.push(char::from(b'0' + square.row as u8));
            out.push('\n');
        }
    }
    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn cell_to_unicode(cell: Cell, square: Square) -> char {
    match cell {
        Cell::Man(Color::White) => '⛀',
        Cell::King(Color::White) => '⛁',
        Cell::Man(Color::Black) => '⛂',
        Cell::King(Color::Black) => '⛃',
        Cell::Empty if square.is_dark() => '·',
        Cell::Empty => ' ',
    }
}
