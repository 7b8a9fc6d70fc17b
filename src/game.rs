//
// This file is part of noughts.
//
// noughts is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// noughts is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with noughts. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

//! A session of rounds between a human and the search.
//!
//! `Game` owns the one real board.  Every change to it goes through a
//! `Command`, and every command either succeeds with a `Step` or is rejected
//! with an `Error` and changes nothing.

use std::fmt;

use tracing::info;

use crate::analysis::search::{Analysis, MinimaxSearch, Search};
use crate::board::{Board, Mark, Move, Outcome};
use crate::error::{Error, Result};

/// Who plays what, and who opens the first round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settings {
    /// The mark played by the search.
    pub computer: Mark,
    /// The mark that moves first in the first round.
    pub first: Mark,
}

/// The computer plays O and opens.
impl Default for Settings {
    fn default() -> Settings {
        Settings {
            computer: Mark::O,
            first: Mark::O,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    InProgress,
    /// The round ended.  Waiting for `NextRound` or `Quit`.
    RoundOver(Outcome),
    /// Terminal.
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// The human claims a cell.
    Place(Move),
    /// The computer searches and moves.
    Computer,
    /// Clear the board after a finished round.
    NextRound,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Moved(Turn),
    NextRound,
    Quit,
}

/// A move that was applied to the board, and what it led to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Turn {
    pub mark: Mark,
    pub ply: Move,
    pub outcome: Outcome,
}

/// Finished rounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => (),
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "X: {}  O: {}  Draws: {}", self.x_wins, self.o_wins, self.draws)
    }
}

/// One continuing session.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Mark,
    settings: Settings,
    phase: Phase,
    tally: Tally,
}

impl Game {
    pub fn new(settings: Settings) -> Game {
        Game {
            board: Board::new(),
            to_move: settings.first,
            settings,
            phase: Phase::InProgress,
            tally: Tally::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The mark typed in by the human.
    pub fn human(&self) -> Mark {
        self.settings.computer.opponent()
    }

    /// Returns `true` if a round is in progress and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.phase == Phase::InProgress && self.to_move == self.settings.computer
    }

    /// Applies one command.
    pub fn apply(&mut self, command: Command) -> Result<Step> {
        match command {
            Command::Place(ply) => self.play_human(ply).map(Step::Moved),
            Command::Computer => {
                let (turn, _) = self.play_computer(&mut MinimaxSearch::new())?;
                Ok(Step::Moved(turn))
            },
            Command::NextRound => self.next_round().map(|_| Step::NextRound),
            Command::Quit => {
                self.quit();
                Ok(Step::Quit)
            },
        }
    }

    /// Places the human's mark at `ply`.
    pub fn play_human(&mut self, ply: Move) -> Result<Turn> {
        self.check_in_progress()?;

        if self.to_move != self.human() {
            return Err(Error::NotYourTurn(self.human()));
        }

        if !self.board.is_legal(ply) {
            return Err(Error::Occupied(ply));
        }

        Ok(self.commit(ply))
    }

    /// Runs `search` for the computer's mark and plays the move it picks.
    pub fn play_computer<S>(&mut self, search: &mut S) -> Result<(Turn, Analysis)> where
        S: Search {
        self.check_in_progress()?;

        if self.to_move != self.settings.computer {
            return Err(Error::NotYourTurn(self.settings.computer));
        }

        let analysis = search.search(&mut self.board, self.to_move);
        let ply = analysis.best.ok_or(Error::NoMoves)?;

        Ok((self.commit(ply), analysis))
    }

    /// Clears the board after a finished round.  The mark that did not make
    /// the last move opens the next round.
    pub fn next_round(&mut self) -> Result<()> {
        match self.phase {
            Phase::InProgress => Err(Error::RoundInProgress),
            Phase::Quit => Err(Error::SessionOver),
            Phase::RoundOver(_) => {
                self.board.reset();
                self.phase = Phase::InProgress;
                info!(first = %self.to_move, "new round");
                Ok(())
            },
        }
    }

    /// Ends the session.  Every later command fails with `Error::SessionOver`.
    pub fn quit(&mut self) {
        if self.phase != Phase::Quit {
            info!(tally = %self.tally, "session over");
        }
        self.phase = Phase::Quit;
    }

    fn check_in_progress(&self) -> Result<()> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::RoundOver(_) => Err(Error::RoundOver),
            Phase::Quit => Err(Error::SessionOver),
        }
    }

    fn commit(&mut self, ply: Move) -> Turn {
        let mark = self.to_move;
        self.board.play(mark, ply);

        let outcome = self.board.outcome();
        info!(%mark, %ply, "played");

        if outcome.is_terminal() {
            self.phase = Phase::RoundOver(outcome);
            self.tally.record(outcome);
            info!(%outcome, "round over");
        }

        self.to_move = mark.opponent();

        Turn {
            mark,
            ply,
            outcome,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(row: usize, column: usize) -> Move {
        Move::new(row, column).unwrap()
    }

    #[test]
    fn test_computer_opens_by_default() {
        let mut game = Game::new(Settings::default());
        assert!(game.is_computer_turn());
        assert_eq!(game.play_human(at(1, 1)), Err(Error::NotYourTurn(Mark::X)));

        let step = game.apply(Command::Computer).unwrap();
        assert_eq!(step, Step::Moved(Turn {
            mark: Mark::O,
            ply: at(0, 0),
            outcome: Outcome::Ongoing,
        }));
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.board().turns(), 1);
    }

    #[test]
    fn test_rejects_occupied_cell_without_changing_state() {
        let mut game = Game::new(Settings::default());
        game.apply(Command::Computer).unwrap();
        let before = game.board().clone();

        assert_eq!(game.apply(Command::Place(at(0, 0))), Err(Error::Occupied(at(0, 0))));
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_computer_refuses_out_of_turn() {
        let mut game = Game::new(Settings { computer: Mark::X, first: Mark::O });
        assert!(!game.is_computer_turn());
        assert_eq!(game.apply(Command::Computer), Err(Error::NotYourTurn(Mark::X)));
    }

    #[test]
    fn test_next_round_only_after_round_over() {
        let mut game = Game::new(Settings::default());
        assert_eq!(game.next_round(), Err(Error::RoundInProgress));
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut game = Game::new(Settings::default());
        assert_eq!(game.apply(Command::Quit), Ok(Step::Quit));
        assert_eq!(game.phase(), Phase::Quit);
        assert_eq!(game.apply(Command::Computer), Err(Error::SessionOver));
        assert_eq!(game.apply(Command::Place(at(1, 1))), Err(Error::SessionOver));
        assert_eq!(game.apply(Command::NextRound), Err(Error::SessionOver));
        assert_eq!(game.apply(Command::Quit), Ok(Step::Quit));
    }

    #[test]
    fn test_tally() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win(Mark::O));
        tally.record(Outcome::Draw);
        tally.record(Outcome::Ongoing);
        assert_eq!(tally.wins(Mark::O), 1);
        assert_eq!(tally.wins(Mark::X), 0);
        assert_eq!(tally.rounds(), 2);
        assert_eq!(tally.to_string(), "X: 0  O: 1  Draws: 1");
    }
}
