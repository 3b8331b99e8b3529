//! Exhaustive minimax move selection (the Hard tier)
//!
//! Scores are absolute: an O win is +10, an X win is -10, a draw is 0,
//! with no depth discount. O maximizes and X minimizes. The tree walk is
//! deliberately plain recursion over every legal continuation; caching or
//! pruning would change which equally-scored move is found first.

use crate::{
    board::{Board, Player},
    outcome::{self, GameOutcome},
};

/// Best move for `player`, visiting candidate cells in ascending order.
///
/// A candidate replaces the incumbent only when strictly better for the
/// mover, so the lowest-index move among equals wins. Returns `None` on
/// decided or full boards.
pub fn best_move(board: &Board, player: Player) -> Option<usize> {
    if outcome::evaluate(board).is_terminal() {
        return None;
    }

    let mut best_score = match player {
        Player::O => i32::MIN,
        Player::X => i32::MAX,
    };
    let mut best_pos = None;

    for pos in board.empty_positions() {
        let next = board
            .place(pos, player)
            .expect("empty positions are legal placements");
        let value = score(&next, player.opponent());
        let better = match player {
            Player::O => value > best_score,
            Player::X => value < best_score,
        };
        if better {
            best_score = value;
            best_pos = Some(pos);
        }
    }

    best_pos
}

/// Exhaustive game-tree value of `board` with `to_move` next to act
fn score(board: &Board, to_move: Player) -> i32 {
    match outcome::evaluate(board) {
        GameOutcome::Win(Player::O) => 10,
        GameOutcome::Win(Player::X) => -10,
        GameOutcome::Draw => 0,
        GameOutcome::InProgress => {
            let mut best = match to_move {
                Player::O => i32::MIN,
                Player::X => i32::MAX,
            };
            for pos in board.empty_positions() {
                let next = board
                    .place(pos, to_move)
                    .expect("empty positions are legal placements");
                let value = score(&next, to_move.opponent());
                best = match to_move {
                    Player::O => best.max(value),
                    Player::X => best.min(value),
                };
            }
            best
        }
    }
}
