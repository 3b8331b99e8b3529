//! Test suite for full game sessions driven through the public API

mod common;

use common::board;
use oxo::{Difficulty, Error, Game, GameOutcome, Phase, Player, lines::winning_move};

/// Script the player side: take an open win when one exists, otherwise
/// the lowest open cell; let the engine answer until the game is decided.
fn drive_to_finish(game: &mut Game) -> Phase {
    while game.outcome() == GameOutcome::InProgress {
        let position = *game.board();
        let pos = winning_move(&position, Player::X)
            .unwrap_or_else(|| position.empty_positions()[0]);
        game.play_player(pos).expect("scripted move is legal");

        if game.phase() == Phase::OpponentTurn {
            game.play_opponent().expect("engine can reply");
        }
    }
    game.phase()
}

#[test]
fn a_win_seeking_player_beats_the_random_tier_eventually() {
    for seed in 0..100 {
        let mut game = Game::new(Difficulty::Easy, Some(seed));
        if drive_to_finish(&mut game) == Phase::PlayerWon {
            return;
        }
    }
    panic!("one hundred seeded games against random play produced no player win");
}

#[test]
fn a_blind_player_loses_to_the_heuristic_tier() {
    // Lowest-open-cell play hands the cascade a win: the engine takes the
    // center, blocks the top row, and completes the anti-diagonal
    let mut game = Game::new(Difficulty::Medium, Some(0));

    for pos in [0, 1, 3] {
        game.play_player(pos).expect("scripted move is legal");
        if game.phase() == Phase::OpponentTurn {
            game.play_opponent().expect("engine can reply");
        }
    }

    assert_eq!(game.phase(), Phase::OpponentWon);
    assert_eq!(game.outcome(), GameOutcome::Win(Player::O));
    assert_eq!(*game.board(), board("XXOXO.O.."));
    assert!(matches!(game.play_player(5), Err(Error::GameOver)));
}

#[test]
fn seeded_sessions_replay_move_for_move() {
    let mut first = Game::new(Difficulty::Easy, Some(21));
    let mut second = Game::new(Difficulty::Easy, Some(21));

    while first.outcome() == GameOutcome::InProgress {
        let pos = first.board().empty_positions()[0];
        first.play_player(pos).expect("scripted move is legal");
        second.play_player(pos).expect("scripted move is legal");

        if first.phase() == Phase::OpponentTurn {
            let first_reply = first.play_opponent().expect("engine can reply");
            let second_reply = second.play_opponent().expect("engine can reply");
            assert_eq!(first_reply, second_reply);
        }

        assert_eq!(first.board(), second.board());
    }

    assert_eq!(first.phase(), second.phase());
}

#[test]
fn session_guards_surface_the_error_variants() {
    let mut game = Game::new(Difficulty::Easy, Some(4));

    assert!(matches!(
        game.play_opponent(),
        Err(Error::OutOfTurn { player: Player::O })
    ));
    assert!(matches!(
        game.play_player(9),
        Err(Error::InvalidPosition { position: 9 })
    ));

    game.play_player(4).expect("center is open");
    assert!(matches!(
        game.play_player(0),
        Err(Error::OutOfTurn { player: Player::X })
    ));
}

#[test]
fn restarting_mid_game_gives_the_player_a_fresh_board() {
    let mut game = Game::new(Difficulty::Medium, Some(2));
    game.play_player(4).expect("center is open");
    game.play_opponent().expect("engine can reply");

    game.reset();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.board().empty_positions().len(), 9);
    assert_eq!(game.difficulty(), Difficulty::Medium);
}
