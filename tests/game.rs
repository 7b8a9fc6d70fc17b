extern crate noughts;

use noughts::game::Tally;
use noughts::{Command, Error, Game, Mark, Move, Outcome, Phase, Settings, Step};

fn at(row: usize, column: usize) -> Move {
    Move::new(row, column).unwrap()
}

/// Plays a human who always takes the lowest numbered empty cell until the
/// round ends.
fn play_round(game: &mut Game) -> Outcome {
    loop {
        let step = if game.is_computer_turn() {
            game.apply(Command::Computer).unwrap()
        } else {
            let ply = game.board().legal_moves()[0];
            game.apply(Command::Place(ply)).unwrap()
        };

        if let Step::Moved(turn) = step {
            if turn.outcome.is_terminal() {
                assert_eq!(game.phase(), Phase::RoundOver(turn.outcome));
                return turn.outcome;
            }
        }
    }
}

#[test]
fn test_computer_beats_naive_human() {
    let mut game = Game::new(Settings::default());
    let outcome = play_round(&mut game);

    assert_eq!(outcome, Outcome::Win(Mark::O));
    assert_eq!(game.tally(), &Tally { x_wins: 0, o_wins: 1, draws: 0 });
}

#[test]
fn test_round_over_blocks_moves_until_next_round() {
    let mut game = Game::new(Settings::default());
    play_round(&mut game);

    let board = game.board().clone();
    assert_eq!(game.apply(Command::Computer), Err(Error::RoundOver));
    assert_eq!(game.apply(Command::Place(at(2, 2))), Err(Error::RoundOver));
    assert_eq!(game.board(), &board);

    assert_eq!(game.apply(Command::NextRound), Ok(Step::NextRound));
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.board().turns(), 0);
}

#[test]
fn test_loser_opens_next_round() {
    let mut game = Game::new(Settings::default());
    play_round(&mut game);

    // O made the winning move, so X opens.
    game.apply(Command::NextRound).unwrap();
    assert_eq!(game.to_move(), Mark::X);
    assert!(!game.is_computer_turn());
}

#[test]
fn test_session_of_rounds() {
    let mut game = Game::new(Settings { computer: Mark::X, first: Mark::O });

    for _ in 0..4 {
        let outcome = play_round(&mut game);
        assert_ne!(outcome, Outcome::Win(Mark::O));
        game.apply(Command::NextRound).unwrap();
    }

    assert_eq!(game.tally().rounds(), 4);
    assert_eq!(game.tally().wins(Mark::O), 0);

    assert_eq!(game.apply(Command::Quit), Ok(Step::Quit));
    assert_eq!(game.phase(), Phase::Quit);
    assert_eq!(game.apply(Command::NextRound), Err(Error::SessionOver));
}

#[test]
fn test_human_moves_are_recorded() {
    let mut game = Game::new(Settings { computer: Mark::O, first: Mark::X });
    let turn = game.play_human(at(1, 1)).unwrap();

    assert_eq!(turn.mark, Mark::X);
    assert_eq!(turn.ply, at(1, 1));
    assert_eq!(turn.outcome, Outcome::Ongoing);
    assert_eq!(game.board().get(at(1, 1)), Some(Mark::X));
    assert!(game.is_computer_turn());
    assert_eq!(game.play_human(at(0, 0)), Err(Error::NotYourTurn(Mark::X)));
}
