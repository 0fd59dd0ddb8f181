//! Engine abstraction used by the game driver.
//!
//! Every automated player picks one complete turn for the side to move and
//! can be reconfigured through name/value options between games.

use crate::engines::engine_options::OptionError;
use crate::game_state::draughts_types::{BoardState, Color};
use crate::moves::move_descriptions::Turn;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    /// Empty when the side to move has no legal turn.
    pub turn: Turn,
    pub score: Option<f64>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), OptionError> {
        Err(OptionError::UnknownOption(name.to_owned()))
    }

    fn choose_turn(&mut self, board: &BoardState, color: Color) -> EngineOutput;
}
