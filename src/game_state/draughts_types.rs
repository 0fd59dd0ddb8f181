//! Core value types shared by the board, move generation and search.
//!
//! Squares are addressed as `(row, col)` with row 0 at the top of the board,
//! which is Black's back rank in the starting layout.

use std::fmt;

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::history_entry::HistoryEntry;

pub const BOARD_SIZE: i8 = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a man's forward step.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is promoted.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Cell {
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Man(color) | Cell::King(color) => Some(color),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// The king of the same color; kings and empty squares are unchanged.
    #[inline]
    pub const fn crowned(self) -> Self {
        match self {
            Cell::Man(color) => Cell::King(color),
            other => other,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Man(Color::White) => 'w',
            Cell::Man(Color::Black) => 'b',
            Cell::King(Color::White) => 'W',
            Cell::King(Color::Black) => 'B',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::Man(Color::White)),
            'b' => Some(Cell::Man(Color::Black)),
            'W' => Some(Cell::King(Color::White)),
            'B' => Some(Cell::King(Color::Black)),
            _ => None,
        }
    }
}

/// Board coordinate, always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Returns `None` when the coordinate is off the board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row + d_row, self.col + d_col)
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Shorthand for squares known to be on the board (tests, layouts, benches).
///
/// Panics on an off-board coordinate.
#[inline]
pub const fn sq(row: i8, col: i8) -> Square {
    match Square::new(row, col) {
        Some(square) => square,
        None => panic!("square off the board"),
    }
}

/// The 8x8 piece grid. `Copy`, so every search node owns its snapshot.
pub type Grid = [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize];

pub const EMPTY_GRID: Grid = [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize];

#[inline]
pub fn cell_at(grid: &Grid, square: Square) -> Cell {
    grid[square.row as usize][square.col as usize]
}

#[inline]
pub fn set_cell(grid: &mut Grid, square: Square, cell: Cell) {
    grid[square.row as usize][square.col as usize] = cell;
}

/// Men and kings of one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub men: u32,
    pub kings: u32,
}

impl PieceCounts {
    #[inline]
    pub const fn total(self) -> u32 {
        self.men + self.kings
    }
}

pub fn count_pieces(grid: &Grid, color: Color) -> PieceCounts {
    let mut counts = PieceCounts::default();
    for cell in grid.iter().flatten() {
        match cell {
            Cell::Man(c) if *c == color => counts.men += 1,
            Cell::King(c) if *c == color => counts.kings += 1,
            _ => {}
        }
    }
    counts
}
