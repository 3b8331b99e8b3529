//! Analyze command - Inspect a position and each tier's reply

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board::Board,
    engine::{self, Difficulty},
    outcome,
};

#[derive(Parser, Debug)]
#[command(about = "Inspect a position and each tier's chosen move")]
pub struct AnalyzeArgs {
    /// Board as nine cells in row-major order ('X', 'O', '.' for open)
    pub board: String,

    /// Random seed for the randomized tiers
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;

    println!("=== Position ===");
    println!("{board}");
    println!("Verdict: {:?}", outcome::evaluate(&board));

    let open = board.empty_positions();
    let cells = open
        .iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Open cells: [{cells}]");

    println!("\n=== Engine Moves ===");
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        // Fresh stream per tier so a shared seed gives comparable picks
        let mut rng = match args.seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        match engine::select_move(&board, difficulty, &mut rng) {
            Some(pos) => println!("{difficulty:?}: cell {pos}"),
            None => println!("{difficulty:?}: no move (position is decided)"),
        }
    }

    Ok(())
}
