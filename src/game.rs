//! Game session management
//!
//! A session sequences turns between the human player (X) and the engine
//! (O); the board and the engines stay pure underneath it.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    board::{Board, Player},
    engine::{self, Difficulty},
    outcome::{self, GameOutcome},
};

/// Whose move it is, or how the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    OpponentTurn,
    PlayerWon,
    OpponentWon,
    Draw,
}

/// One game against the engine: the human plays X and opens, the engine
/// replies as O at the session's difficulty.
///
/// # Examples
///
/// ```
/// use oxo::{Difficulty, Game, Phase};
///
/// let mut game = Game::new(Difficulty::Hard, Some(42));
/// game.play_player(4).unwrap();
/// assert_eq!(game.phase(), Phase::OpponentTurn);
///
/// let reply = game.play_opponent().unwrap();
/// assert_eq!(reply, 0);
/// assert_eq!(game.phase(), Phase::PlayerTurn);
/// ```
#[derive(Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    difficulty: Difficulty,
    rng: StdRng,
}

fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    }
}

impl Game {
    /// Start a fresh game. `seed` fixes the engine's randomness for
    /// reproducible sessions; `None` draws a seed from entropy.
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            difficulty,
            rng: session_rng(seed),
        }
    }

    /// Current board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Phase of the session, derived from the board and side to move
    pub fn phase(&self) -> Phase {
        match self.outcome() {
            GameOutcome::Win(Player::X) => Phase::PlayerWon,
            GameOutcome::Win(Player::O) => Phase::OpponentWon,
            GameOutcome::Draw => Phase::Draw,
            GameOutcome::InProgress => match self.to_move {
                Player::X => Phase::PlayerTurn,
                Player::O => Phase::OpponentTurn,
            },
        }
    }

    /// Evaluate the current board
    pub fn outcome(&self) -> GameOutcome {
        outcome::evaluate(&self.board)
    }

    /// Apply the human player's move at `pos` (0-8).
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once the game is decided, `OutOfTurn` while the
    /// engine is to move, and the placement errors for bad positions.
    pub fn play_player(&mut self, pos: usize) -> Result<()> {
        match self.phase() {
            Phase::PlayerTurn => {}
            Phase::OpponentTurn => return Err(Error::OutOfTurn { player: Player::X }),
            _ => return Err(Error::GameOver),
        }

        self.board = self.board.place(pos, Player::X)?;
        self.to_move = Player::O;
        Ok(())
    }

    /// Let the engine choose and apply its move, returning the cell taken.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once the game is decided and `OutOfTurn` while
    /// the player is to move.
    pub fn play_opponent(&mut self) -> Result<usize> {
        match self.phase() {
            Phase::OpponentTurn => {}
            Phase::PlayerTurn => return Err(Error::OutOfTurn { player: Player::O }),
            _ => return Err(Error::GameOver),
        }

        // The phase guard rules out decided and full boards, so the engine
        // always has a cell here.
        let pos = engine::select_move(&self.board, self.difficulty, &mut self.rng)
            .ok_or(Error::NoValidMoves)?;
        self.board = self.board.place(pos, Player::O)?;
        self.to_move = Player::X;
        Ok(pos)
    }

    /// Clear the board for a fresh game; the player opens again
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
    }

    /// Switch difficulty; an actual tier change resets the board
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            self.difficulty = difficulty;
            self.reset();
        }
    }

    /// Set or reset the session's RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = session_rng(seed);
    }
}
