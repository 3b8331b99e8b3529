//! Common test utilities for the oxo test suite.
//!
//! Provides board construction and exhaustive position enumeration used
//! across multiple tests.

use std::collections::HashSet;

use oxo::{Board, GameOutcome, Player, evaluate};

/// Build a board from a nine-character string, panicking on bad input.
pub fn board(cells: &str) -> Board {
    Board::from_string(cells).expect("test board should parse")
}

/// Enumerate every distinct in-progress position reachable in legal
/// alternating play from the empty board.
pub fn reachable_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    walk(Board::new(), Player::X, &mut seen, &mut positions);
    positions
}

fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>, positions: &mut Vec<Board>) {
    if evaluate(&board) != GameOutcome::InProgress {
        return;
    }
    if !seen.insert(board) {
        return;
    }
    positions.push(board);

    for pos in board.empty_positions() {
        let next = board.place(pos, to_move).expect("open cells are legal");
        walk(next, to_move.opponent(), seen, positions);
    }
}
