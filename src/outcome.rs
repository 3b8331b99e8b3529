//! Board outcome evaluation

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Player},
    lines,
};

/// Outcome of evaluating a board position.
///
/// Never stored by long-lived structures; always derived from a board via
/// [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Check if the game is over (win or draw)
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Evaluate a board: completed line first, then full-board draw, otherwise
/// the game is still in progress.
///
/// Pure and total over every cell assignment, legal or not; no error paths.
/// The line scan follows [`lines::WINNING_LINES`] order, which decides the
/// winner for (unreachable) double-win encodings.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = lines::line_winner(board) {
        GameOutcome::Win(winner)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
