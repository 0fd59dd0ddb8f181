//! Which side a minimax layer maximizes for.
//!
//! The root mover's opponent replies at depth 0, so even depths minimize and
//! odd depths maximize. Leaves are always scored for the root mover.

use crate::game_state::draughts_types::Color;

#[inline]
pub fn is_maximizing_layer(depth: u8) -> bool {
    depth % 2 == 1
}

/// Color whose advantage is measured at a node where `mover` is to act.
#[inline]
pub fn favored_color_at(mover: Color, depth: u8) -> Color {
    if is_maximizing_layer(depth) {
        mover
    } else {
        mover.opposite()
    }
}
