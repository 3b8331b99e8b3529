//! Uniform random move selection (the Easy tier)

use rand::{Rng, seq::IndexedRandom};

use crate::board::Board;

/// Uniform choice over the empty cells. `None` only when the board is full.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let moves = board.empty_positions();
    moves.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::board::Player;

    #[test]
    fn test_random_move_picks_empty_cell() {
        let board = Board::from_string("XOX.O.X..").expect("test board should parse");
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let pos = random_move(&board, &mut rng).expect("open cells remain");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_random_move_none_when_full() {
        let mut board = Board::new();
        let marks = [Player::X, Player::O];
        for pos in 0..9 {
            board = board.place(pos, marks[pos % 2]).expect("cell is empty");
        }
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_move_deterministic_under_seed() {
        let board = Board::from_string("X...O....").expect("test board should parse");
        let mut first = StdRng::seed_from_u64(11);
        let mut second = StdRng::seed_from_u64(11);
        assert_eq!(random_move(&board, &mut first), random_move(&board, &mut second));
    }

    #[test]
    fn test_random_move_covers_all_empty_cells() {
        // With a single empty cell the choice is forced
        let board = Board::from_string("XOXXOXOX.").expect("test board should parse");
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(random_move(&board, &mut rng), Some(8));
    }
}
