//! Minimax engine: fixed-depth search with alpha-beta cutoffs.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::engines::engine_options::{EngineOptions, OptionError};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::draughts_types::{BoardState, Color};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::minimax::find_best_turn;

pub struct MinimaxEngine {
    options: EngineOptions,
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            rng: StdRng::seed_from_u64(options.seed.resolve()),
            options,
            move_generator: LegalMoveGenerator,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(EngineOptions {
            depth: depth.max(1),
            ..EngineOptions::default()
        })
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.options.seed.resolve());
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumDraughts Minimax"
    }

    fn new_game(&mut self) {
        self.reseed();
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        if let Err(err) = self.options.set(name, value) {
            warn!(option = name, value, %err, "rejected engine option");
            return Err(err);
        }
        if name.eq_ignore_ascii_case("NoRandom") {
            self.reseed();
        }
        Ok(())
    }

    fn choose_turn(&mut self, board: &BoardState, color: Color) -> EngineOutput {
        let started = Instant::now();
        let result = find_best_turn(
            board.grid(),
            color,
            &self.move_generator,
            &self.options.scoring,
            &mut self.rng,
            self.options.search_config(),
        );
        debug!(
            %color,
            depth = self.options.depth,
            pruning = self.options.pruning,
            nodes = result.nodes,
            score = result.score,
            moves = result.turn.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "minimax search finished"
        );

        EngineOutput {
            turn: result.turn,
            score: Some(result.score),
            nodes: result.nodes,
        }
    }
}
