//! Depth-limited minimax with alpha-beta cutoffs over whole turns.
//!
//! The root enumerates the mover's turns, following each capture chain to its
//! end, and hands every resulting position to the alternating minimax with the
//! opponent to move at depth 0. Capture chains inside the tree are expanded at
//! the same depth by the same mover; a quiet move or a finished chain passes
//! the turn and descends one layer. Every node works on its own grid copy.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::draughts_types::{Color, Grid, Square};
use crate::move_generation::legal_move_apply::apply_move_to_grid;
use crate::move_generation::move_generator::{LegalMoves, MoveGenerator};
use crate::moves::move_descriptions::Turn;
use crate::search::board_scoring::{BoardScorer, WIN_SCORE};
use crate::search::layer_orientation::{favored_color_at, is_maximizing_layer};

/// Lower bound below every reachable evaluation.
const NO_SCORE: f64 = -1.0;
/// Upper bound above every reachable evaluation.
const BETA_START: f64 = WIN_SCORE + 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of opponent/mover layers below the root, at least 1.
    pub max_depth: u8,
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            pruning: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Moves of one complete turn; empty when the mover has no legal move.
    pub turn: Turn,
    pub score: f64,
    pub nodes: u64,
}

/// Picks the turn for `color` with the best minimax value.
///
/// Color-wide move lists are shuffled with `rng` before they are searched, so
/// ties go to whichever candidate the generator puts first.
pub fn find_best_turn<G, S, R>(
    grid: &Grid,
    color: Color,
    generator: &G,
    scorer: &S,
    rng: &mut R,
    config: SearchConfig,
) -> SearchResult
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    let mut search = Search {
        generator,
        scorer,
        rng,
        config,
        nodes: 0,
    };
    let (score, turn) = search.root(grid, color, None, NO_SCORE);
    SearchResult {
        score: if turn.is_empty() { 0.0 } else { score },
        turn,
        nodes: search.nodes,
    }
}

struct Search<'a, G: ?Sized, S: ?Sized, R: ?Sized> {
    generator: &'a G,
    scorer: &'a S,
    rng: &'a mut R,
    config: SearchConfig,
    nodes: u64,
}

impl<G, S, R> Search<'_, G, S, R>
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
    R: Rng + ?Sized,
{
    fn color_moves(&mut self, grid: &Grid, color: Color) -> LegalMoves {
        let mut legal = self.generator.legal_moves_for_color(grid, color);
        legal.moves.shuffle(&mut *self.rng);
        legal
    }

    /// Best continuation of the root mover's turn. `continuing` is the landing
    /// square of the chain so far; `alpha` is the best value already secured.
    fn root(
        &mut self,
        grid: &Grid,
        color: Color,
        continuing: Option<Square>,
        alpha: f64,
    ) -> (f64, Turn) {
        let legal = match continuing {
            Some(square) => {
                let legal = self.generator.legal_moves_for_piece(grid, square);
                if !legal.captures_available {
                    let score = self.minimax(grid, color.opposite(), 0, alpha, BETA_START, None);
                    return (score, Turn::new());
                }
                legal
            }
            None => self.color_moves(grid, color),
        };

        let mut best_score = NO_SCORE;
        let mut best_turn = Turn::new();
        for mv in legal.moves.iter().copied() {
            let next = apply_move_to_grid(grid, mv);
            let running = best_score.max(NO_SCORE);
            let (score, tail) = if legal.captures_available {
                self.root(&next, color, Some(mv.to), running)
            } else {
                let score = self.minimax(&next, color.opposite(), 0, running, BETA_START, None);
                (score, Turn::new())
            };

            if score > best_score || best_turn.is_empty() {
                best_score = score;
                best_turn.clear();
                best_turn.push(mv);
                best_turn.extend(tail);
            }
        }
        (best_score, best_turn)
    }

    fn minimax(
        &mut self,
        grid: &Grid,
        mover: Color,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        continuing: Option<Square>,
    ) -> f64 {
        self.nodes += 1;
        if depth == self.config.max_depth {
            return self.scorer.score(grid, favored_color_at(mover, depth));
        }

        let legal = match continuing {
            Some(square) => self.generator.legal_moves_for_piece(grid, square),
            None => self.color_moves(grid, mover),
        };
        if continuing.is_some() && !legal.captures_available {
            return self.minimax(grid, mover.opposite(), depth + 1, alpha, beta, None);
        }

        let maximizing = is_maximizing_layer(depth);
        if legal.is_empty() {
            return if maximizing { 0.0 } else { WIN_SCORE };
        }

        let mut min_score = BETA_START;
        let mut max_score = NO_SCORE;
        for mv in legal.moves.iter().copied() {
            let next = apply_move_to_grid(grid, mv);
            let score = if legal.captures_available {
                self.minimax(&next, mover, depth, alpha, beta, Some(mv.to))
            } else {
                self.minimax(&next, mover.opposite(), depth + 1, alpha, beta, None)
            };

            min_score = min_score.min(score);
            max_score = max_score.max(score);
            if maximizing {
                alpha = alpha.max(max_score);
            } else {
                beta = beta.min(min_score);
            }
            if self.config.pruning && alpha >= beta {
                return if maximizing {
                    max_score + 1.0
                } else {
                    min_score - 1.0
                };
            }
        }

        if maximizing {
            max_score
        } else {
            min_score
        }
    }
}
