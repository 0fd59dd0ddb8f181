//! Random-turn engine.
//!
//! Picks a uniformly random legal move and, while the moved piece can keep
//! capturing, a random continuation. Used as a baseline opponent and in
//! integration tests.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_options::{parse_bool, OptionError, RandomSeed};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::draughts_types::{BoardState, Color};
use crate::move_generation::legal_move_apply::apply_move_to_grid;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Turn;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    seed: RandomSeed,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(RandomSeed::WallClock)
    }

    pub fn with_seed(seed: RandomSeed) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            seed,
            rng: StdRng::seed_from_u64(seed.resolve()),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumDraughts Random"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed.resolve());
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        if !name.eq_ignore_ascii_case("NoRandom") {
            return Err(OptionError::UnknownOption(name.to_owned()));
        }
        self.seed = if parse_bool(name, value.trim())? {
            RandomSeed::Fixed(RandomSeed::DETERMINISTIC)
        } else {
            RandomSeed::WallClock
        };
        self.new_game();
        Ok(())
    }

    fn choose_turn(&mut self, board: &BoardState, color: Color) -> EngineOutput {
        let mut grid = board.snapshot();
        let mut turn = Turn::new();
        let mut legal = self.move_generator.legal_moves_for_color(&grid, color);

        while let Some(mv) = legal.moves.choose(&mut self.rng).copied() {
            turn.push(mv);
            grid = apply_move_to_grid(&grid, mv);
            if !mv.is_capture() {
                break;
            }
            legal = self.move_generator.legal_moves_for_piece(&grid, mv.to);
            if !legal.captures_available {
                break;
            }
        }

        EngineOutput {
            turn,
            score: None,
            nodes: 0,
        }
    }
}
