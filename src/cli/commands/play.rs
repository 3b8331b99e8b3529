//! Play command - Interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    Error,
    board::{Board, Cell},
    engine::Difficulty,
    game::{Game, Phase},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Engine difficulty tier
    #[arg(long, short = 'd', value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Random seed for reproducible engine play
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new(args.difficulty, args.seed);

    println!("Tic-tac-toe against the {} engine. You play X.", args.difficulty);
    println!("Enter a cell number (1-9), 'restart', or 'quit'.");

    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                println!("\n{}", render(game.board()));
                println!("Your turn (X).");
                print!("> ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    break;
                };
                let input = line?;
                let input = input.trim();

                match input {
                    "quit" | "q" => break,
                    "restart" => {
                        game.reset();
                        continue;
                    }
                    _ => {}
                }

                let Some(cell) = parse_cell(input) else {
                    println!("Enter a cell number from 1 to 9, 'restart', or 'quit'.");
                    continue;
                };

                match game.play_player(cell - 1) {
                    Ok(()) => {}
                    Err(Error::OccupiedCell { .. }) => {
                        println!("Cell {cell} is already taken.");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Phase::OpponentTurn => {
                let reply = game.play_opponent()?;
                println!("Engine takes cell {}.", reply + 1);
            }
            Phase::PlayerWon | Phase::OpponentWon | Phase::Draw => {
                println!("\n{}", render(game.board()));
                let message = match game.phase() {
                    Phase::PlayerWon => "Congratulations, you won!",
                    Phase::OpponentWon => "You lost the game.",
                    _ => "It's a tie!",
                };
                println!("{message}");

                if !play_again(&mut lines)? {
                    break;
                }
                game.reset();
            }
        }
    }

    Ok(())
}

/// Render the board with open cells shown as their 1-based number
fn render(board: &Board) -> String {
    let mut out = String::new();
    for (i, cell) in board.cells.iter().enumerate() {
        match cell {
            Cell::Empty => out.push((b'1' + i as u8) as char),
            _ => out.push(cell.to_char()),
        }
        if (i + 1).is_multiple_of(3) {
            if i < 8 {
                out.push('\n');
            }
        } else {
            out.push(' ');
        }
    }
    out
}

fn parse_cell(input: &str) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(cell @ 1..=9) => Some(cell),
        _ => None,
    }
}

fn play_again<B: BufRead>(lines: &mut io::Lines<B>) -> Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
        return Ok(false);
    };
    let answer = line?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
