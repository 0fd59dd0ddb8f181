//! Move value type.
//!
//! A move is one relocation of one piece, optionally tagged with the square of
//! the piece it jumps. Equality and hashing only look at `from` and `to`, so a
//! from/to selection made without knowing the captured square still matches
//! the generated move.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::draughts_types::Square;

#[derive(Debug, Clone, Copy, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(captured) => write!(f, "{}x{}->{}", self.from, captured, self.to),
            None => write!(f, "{}->{}", self.from, self.to),
        }
    }
}

/// One player's complete action: a quiet move or a whole capture chain.
pub type Turn = Vec<Move>;

/// Space-separated moves of a turn, `-` for an empty one.
pub fn format_turn(turn: &[Move]) -> String {
    if turn.is_empty() {
        return "-".to_owned();
    }
    turn.iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
