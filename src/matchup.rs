//! Automated matchups between a challenger and the engine
//!
//! A matchup plays a batch of games with a scripted challenger as X
//! against the engine as O and tallies the outcomes. Summaries serialize
//! to JSON for later inspection.

use std::fmt;

use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    board::{Board, Player},
    engine::{Difficulty, minimax},
    game::Game,
    outcome::GameOutcome,
};

/// Scripted stand-in for the human side of a matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Challenger {
    /// Plays a uniformly random open cell
    #[default]
    Random,
    /// Plays perfectly via exhaustive search
    Optimal,
}

impl fmt::Display for Challenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Challenger::Random => "random",
            Challenger::Optimal => "optimal",
        };
        write!(f, "{name}")
    }
}

/// Parameters for a batch of games
#[derive(Debug, Clone)]
pub struct MatchupConfig {
    pub games: usize,
    pub difficulty: Difficulty,
    pub challenger: Challenger,
    pub seed: Option<u64>,
}

impl Default for MatchupConfig {
    fn default() -> Self {
        MatchupConfig {
            games: 100,
            difficulty: Difficulty::Medium,
            challenger: Challenger::Random,
            seed: None,
        }
    }
}

/// Outcome tally for a finished matchup, from the challenger's side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupSummary {
    pub difficulty: Difficulty,
    pub challenger: Challenger,
    pub games: usize,
    pub player_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
}

impl MatchupSummary {
    pub fn new(difficulty: Difficulty, challenger: Challenger) -> Self {
        MatchupSummary {
            difficulty,
            challenger,
            games: 0,
            player_wins: 0,
            opponent_wins: 0,
            draws: 0,
        }
    }

    /// Tally one finished game; unfinished outcomes are not counted
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.player_wins += 1,
            GameOutcome::Win(Player::O) => self.opponent_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => return,
        }
        self.games += 1;
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }

    /// Fraction of games the challenger won
    pub fn player_win_rate(&self) -> f64 {
        self.rate(self.player_wins)
    }

    /// Fraction of games the engine won
    pub fn opponent_win_rate(&self) -> f64 {
        self.rate(self.opponent_wins)
    }

    /// Fraction of games that ended drawn
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Save summary to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

fn challenger_move<R: Rng>(board: &Board, challenger: Challenger, rng: &mut R) -> Result<usize> {
    match challenger {
        Challenger::Random => {
            let moves = board.empty_positions();
            moves.choose(rng).copied().ok_or(Error::NoValidMoves)
        }
        Challenger::Optimal => minimax::best_move(board, Player::X).ok_or(Error::NoValidMoves),
    }
}

// Offset keeps the challenger's stream distinct from the engine's.
fn challenger_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value.wrapping_add(1)),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    }
}

/// Play one game with the challenger as X against the session's engine.
///
/// The session is reset first, so a single `Game` can host a whole batch.
pub fn play_game<R: Rng>(
    game: &mut Game,
    challenger: Challenger,
    rng: &mut R,
) -> Result<GameOutcome> {
    game.reset();

    while game.outcome() == GameOutcome::InProgress {
        let pos = challenger_move(game.board(), challenger, rng)?;
        game.play_player(pos)?;

        if game.outcome() == GameOutcome::InProgress {
            game.play_opponent()?;
        }
    }

    Ok(game.outcome())
}

/// Run a matchup, invoking `on_game` with the index and outcome of each
/// finished game.
pub fn run_matchup_with<F>(config: &MatchupConfig, mut on_game: F) -> Result<MatchupSummary>
where
    F: FnMut(usize, GameOutcome),
{
    let mut game = Game::new(config.difficulty, config.seed);
    let mut rng = challenger_rng(config.seed);
    let mut summary = MatchupSummary::new(config.difficulty, config.challenger);

    for game_num in 0..config.games {
        let outcome = play_game(&mut game, config.challenger, &mut rng)?;
        summary.record(outcome);
        on_game(game_num, outcome);
    }

    Ok(summary)
}

/// Run a matchup without progress reporting.
///
/// # Examples
///
/// ```
/// use oxo::{Challenger, Difficulty, MatchupConfig, run_matchup};
///
/// let config = MatchupConfig {
///     games: 20,
///     difficulty: Difficulty::Easy,
///     challenger: Challenger::Random,
///     seed: Some(42),
/// };
///
/// let summary = run_matchup(&config).unwrap();
/// assert_eq!(
///     summary.player_wins + summary.opponent_wins + summary.draws,
///     20
/// );
/// ```
pub fn run_matchup(config: &MatchupConfig) -> Result<MatchupSummary> {
    run_matchup_with(config, |_, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies_outcomes() {
        let mut summary = MatchupSummary::new(Difficulty::Medium, Challenger::Random);
        summary.record(GameOutcome::Win(Player::X));
        summary.record(GameOutcome::Win(Player::X));
        summary.record(GameOutcome::Win(Player::O));
        summary.record(GameOutcome::Draw);
        summary.record(GameOutcome::Draw);
        summary.record(GameOutcome::Draw);

        assert_eq!(summary.games, 6);
        assert_eq!(summary.player_wins, 2);
        assert_eq!(summary.opponent_wins, 1);
        assert_eq!(summary.draws, 3);
    }

    #[test]
    fn test_record_ignores_unfinished_games() {
        let mut summary = MatchupSummary::new(Difficulty::Easy, Challenger::Random);
        summary.record(GameOutcome::InProgress);

        assert_eq!(summary.games, 0);
        assert_eq!(summary.player_wins, 0);
        assert_eq!(summary.opponent_wins, 0);
        assert_eq!(summary.draws, 0);
    }

    #[test]
    fn test_rates() {
        let mut summary = MatchupSummary::new(Difficulty::Medium, Challenger::Random);
        summary.record(GameOutcome::Win(Player::X));
        summary.record(GameOutcome::Win(Player::O));
        summary.record(GameOutcome::Draw);
        summary.record(GameOutcome::Draw);

        assert!((summary.player_win_rate() - 0.25).abs() < 1e-12);
        assert!((summary.opponent_win_rate() - 0.25).abs() < 1e-12);
        assert!((summary.draw_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rates_are_zero_before_any_game() {
        let summary = MatchupSummary::new(Difficulty::Hard, Challenger::Optimal);
        assert_eq!(summary.player_win_rate(), 0.0);
        assert_eq!(summary.opponent_win_rate(), 0.0);
        assert_eq!(summary.draw_rate(), 0.0);
    }

    #[test]
    fn test_config_defaults() {
        let config = MatchupConfig::default();
        assert_eq!(config.games, 100);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.challenger, Challenger::Random);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_play_game_reaches_a_terminal_outcome() {
        let mut game = Game::new(Difficulty::Easy, Some(0));
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = play_game(&mut game, Challenger::Random, &mut rng)
            .expect("random game should finish");
        assert_ne!(outcome, GameOutcome::InProgress);
        assert_eq!(outcome, game.outcome());
    }

    #[test]
    fn test_play_game_resets_between_games() {
        let mut game = Game::new(Difficulty::Easy, Some(0));
        let mut rng = StdRng::seed_from_u64(1);

        play_game(&mut game, Challenger::Random, &mut rng).expect("first game should finish");
        let outcome = play_game(&mut game, Challenger::Random, &mut rng)
            .expect("session should reset for the second game");
        assert_ne!(outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_challenger_display_names() {
        assert_eq!(Challenger::Random.to_string(), "random");
        assert_eq!(Challenger::Optimal.to_string(), "optimal");
    }
}
