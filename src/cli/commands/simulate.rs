//! Simulate command - Run scripted matchups against the engine

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{
    board::Player,
    engine::Difficulty,
    matchup::{Challenger, MatchupConfig, MatchupSummary, run_matchup_with},
    outcome::GameOutcome,
};

#[derive(Parser, Debug)]
#[command(about = "Run a scripted matchup against the engine")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Engine difficulty tier
    #[arg(long, short = 'd', value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Challenger playing the X side
    #[arg(long, short = 'c', value_enum, default_value_t = Challenger::Random)]
    pub challenger: Challenger,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = MatchupConfig {
        games: args.games,
        difficulty: args.difficulty,
        challenger: args.challenger,
        seed: args.seed,
    };

    println!("=== Matchup Configuration ===");
    println!("Challenger: {}", config.challenger);
    println!("Difficulty: {}", config.difficulty);
    println!("Games: {}", format_number(config.games));
    if let Some(seed) = config.seed {
        println!("Seed: {seed}");
    }

    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")?
            .progress_chars("=>-"),
    );

    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;
    let summary = run_matchup_with(&config, |game_num, outcome| {
        match outcome {
            GameOutcome::Win(Player::X) => wins += 1,
            GameOutcome::Win(Player::O) => losses += 1,
            GameOutcome::Draw => draws += 1,
            GameOutcome::InProgress => {}
        }
        pb.set_position(game_num as u64 + 1);
        pb.set_message(format!("{wins} D:{draws} L:{losses}"));
    })?;
    pb.finish_with_message(format!("{wins} D:{draws} L:{losses}"));

    println!("\n=== Matchup Results ===");
    println!("Total games: {}", format_number(summary.games));
    println!(
        "Challenger wins: {} ({:.1}%)",
        summary.player_wins,
        summary.player_win_rate() * 100.0
    );
    println!(
        "Engine wins: {} ({:.1}%)",
        summary.opponent_wins,
        summary.opponent_win_rate() * 100.0
    );
    println!(
        "Draws: {} ({:.1}%)",
        summary.draws,
        summary.draw_rate() * 100.0
    );

    if let Some(export_path) = &args.export {
        export_summary(&summary, export_path)?;
        println!("\n✓ Results exported to: {}", export_path.display());
    }

    Ok(())
}

/// Export the matchup summary to JSON
fn export_summary(summary: &MatchupSummary, path: &PathBuf) -> Result<()> {
    use std::fs::File;

    #[derive(Serialize)]
    struct MatchupExport {
        difficulty: String,
        challenger: String,
        total_games: usize,
        player_wins: usize,
        opponent_wins: usize,
        draws: usize,
        player_win_rate: f64,
        opponent_win_rate: f64,
        draw_rate: f64,
    }

    let export = MatchupExport {
        difficulty: summary.difficulty.to_string(),
        challenger: summary.challenger.to_string(),
        total_games: summary.games,
        player_wins: summary.player_wins,
        opponent_wins: summary.opponent_wins,
        draws: summary.draws,
        player_win_rate: summary.player_win_rate(),
        opponent_win_rate: summary.opponent_win_rate(),
        draw_rate: summary.draw_rate(),
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}

/// Format numbers with thousand separators
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count == 3 {
            result.insert(0, ',');
            count = 0;
        }
        result.insert(0, c);
        count += 1;
    }

    result
}
