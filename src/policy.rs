//! Move-selection policies for the computer opponent
//!
//! The shipped opponent is [`HeuristicPolicy`], a fixed four-tier rule: win
//! now, block the human's win, take the center, otherwise pick a random
//! empty cell. There is no search and no learning. [`RandomPolicy`] is the
//! uniform baseline used as the simulated human in `noughts simulate`.

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    board::{Board, CENTER, Player, has_won},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Policy trait for selecting the next move.
///
/// Implementations are invoked only while the game is in progress, so the
/// board is guaranteed to have at least one empty cell and no winner.
pub trait MovePolicy: Send {
    /// Select a move for `player` on the given board.
    ///
    /// Must return an empty position (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`](crate::Error::NoMovesAvailable)
    /// if the board is full, which violates the caller's precondition.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Policy name for reporting
    fn name(&self) -> &str;
}

/// The rule-based opponent: win, block, center, random.
///
/// Tiers 1 and 2 scan empty positions in ascending index order and evaluate
/// each candidate on a scratch copy of the board; the real board is never
/// touched. The random fallback draws from the policy's own RNG, which can
/// be seeded for deterministic play.
#[derive(Debug)]
pub struct HeuristicPolicy {
    rng: StdRng,
}

impl HeuristicPolicy {
    /// Create a policy with a non-deterministic RNG
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
        }
    }

    /// Create a policy with a seeded RNG for reproducible fallback moves
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: build_rng(Some(seed)),
        }
    }

    /// First empty position where placing `player`'s mark completes a line.
    ///
    /// Shared by tier 1 (our win) and tier 2 (their win, which we block).
    fn immediate_win(board: &Board, player: Player) -> Option<usize> {
        board
            .empty_positions()
            .into_iter()
            .find(|&pos| has_won(&board.place(pos, player), player))
    }
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        // Tier 1: complete our own line
        if let Some(pos) = Self::immediate_win(board, player) {
            return Ok(pos);
        }

        // Tier 2: deny the opponent's line
        if let Some(pos) = Self::immediate_win(board, player.opponent()) {
            return Ok(pos);
        }

        // Tier 3: the center
        if board.is_empty(CENTER) {
            return Ok(CENTER);
        }

        // Tier 4: uniform random among what remains
        board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoMovesAvailable)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Uniform-random baseline policy
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: build_rng(Some(seed)),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
        board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoMovesAvailable)
    }

    fn name(&self) -> &str {
        "random"
    }
}
