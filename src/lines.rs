//! Winning line analysis

use crate::board::{Board, Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Owner of the first completed line, scanning `WINNING_LINES` in order.
///
/// At most one player can have a line under legal play; the scan order is
/// still the fixed tie-break for encodable boards where both do.
pub fn line_winner(board: &Board) -> Option<Player> {
    for line in &WINNING_LINES {
        let [a, b, c] = *line;
        if board.cells[a] != Cell::Empty
            && board.cells[a] == board.cells[b]
            && board.cells[b] == board.cells[c]
        {
            return board.cells[a].to_player();
        }
    }
    None
}

/// Lowest empty position whose occupation completes a line for `player`,
/// scanning cells 0-8 ascending.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    for pos in 0..9 {
        if board.cells[pos] == Cell::Empty {
            let mut probe = *board;
            probe.cells[pos] = player.to_cell();
            if line_winner(&probe) == Some(player) {
                return Some(pos);
            }
        }
    }
    None
}
