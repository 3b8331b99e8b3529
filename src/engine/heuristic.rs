//! Rule-cascade move selection (the Medium tier)

use rand::Rng;

use crate::{
    board::{Board, Player},
    lines,
};

use super::random;

/// Corner preference order after the center
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// First matching rule of: take the winning cell, block the player's
/// winning cell, take the center, take a corner, move at random.
pub fn heuristic_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    if let Some(pos) = lines::winning_move(board, Player::O) {
        return Some(pos);
    }

    if let Some(pos) = lines::winning_move(board, Player::X) {
        return Some(pos);
    }

    if board.is_empty(4) {
        return Some(4);
    }

    if let Some(pos) = CORNERS.iter().copied().find(|&pos| board.is_empty(pos)) {
        return Some(pos);
    }

    random::random_move(board, rng)
}
