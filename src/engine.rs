//! Move selection for the computer opponent
//!
//! Three tiers: uniform random, an ordered rule cascade, and exhaustive
//! minimax. The engine always plays O; randomness is injected by the
//! caller so sessions and tests control reproducibility.

pub mod heuristic;
pub mod minimax;
pub mod random;

use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    outcome,
};

/// Difficulty tier of the computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Difficulty {
    /// Uniform random over the empty cells
    #[default]
    Easy,
    /// Win, block, center, corners, then random
    Medium,
    /// Exhaustive minimax over the remaining game tree
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Select a move for the computer side at the given difficulty.
///
/// Returns `None` when the position is already decided or the board is
/// full; otherwise the returned index is a currently empty cell. The board
/// is taken as-is, with no mark-parity checks; legality of the move
/// sequence is the session's concern.
///
/// # Examples
///
/// ```
/// use oxo::{Board, Difficulty, select_move};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let cell = select_move(&Board::new(), Difficulty::Hard, &mut rng).unwrap();
/// assert_eq!(cell, 0);
/// ```
pub fn select_move<R: Rng>(board: &Board, difficulty: Difficulty, rng: &mut R) -> Option<usize> {
    if outcome::evaluate(board).is_terminal() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => random::random_move(board, rng),
        Difficulty::Medium => heuristic::heuristic_move(board, rng),
        Difficulty::Hard => minimax::best_move(board, Player::O),
    }
}
