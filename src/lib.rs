//! Tic-tac-toe engine with tiered computer opponents
//!
//! This crate provides:
//! - Complete tic-tac-toe board representation and outcome evaluation
//! - A computer opponent with three difficulty tiers (uniform random,
//!   heuristic cascade, exhaustive search)
//! - Turn-based game sessions for interactive front ends
//! - A matchup harness for measuring the tiers against scripted challengers

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod game;
pub mod lines;
pub mod matchup;
pub mod outcome;

pub use board::{Board, Cell, Player};
pub use engine::{Difficulty, select_move};
pub use error::{Error, Result};
pub use game::{Game, Phase};
pub use lines::WINNING_LINES;
pub use matchup::{
    Challenger, MatchupConfig, MatchupSummary, play_game, run_matchup, run_matchup_with,
};
pub use outcome::{GameOutcome, evaluate};
