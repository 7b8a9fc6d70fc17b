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
// Copyright 2016-2017 Chris Foster
//

//! Tools for searching the game tree.

use std::fmt;

use crate::analysis::Score;
use crate::board::{Board, Mark, Move};

/// The result of a search.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The board on which the search was performed.
    pub board: Board,
    /// The mark the search played for.
    pub mark: Mark,
    /// The chosen move, or `None` if the board was already decided.
    pub best: Option<Move>,
    /// The score of `best`.
    pub evaluation: Option<Score>,
    /// Every root move that was examined, in scan order, with its score.
    pub candidates: Vec<(Move, Score)>,
    /// Statistics from the search.
    pub statistics: Statistics,
}

/// Provides search capabilities.
pub trait Search {
    /// Generates an analysis of `board` for `mark`, which is to move.
    ///
    /// The board is explored in place and is left exactly as it was found.
    fn search(&mut self, board: &mut Board, mark: Mark) -> Analysis;
}

/// Returns the best move for `mark` on `board`, or `None` if the game is over.
///
/// Ties go to the first move in scan order.
///
/// # Example
///
/// ```rust
/// use noughts::{find_best_move, Board, Mark, Move};
///
/// let mut board: Board = "XX./OO./...".parse().unwrap();
/// assert_eq!(find_best_move(&mut board, Mark::X), Some(Move::new(0, 2).unwrap()));
/// ```
pub fn find_best_move(board: &mut Board, mark: Mark) -> Option<Move> {
    MinimaxSearch::new().search(board, mark).best
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "State:\n{}", self.board)?;
        writeln!(f, "Searching for: {}", self.mark)?;
        match (self.best, self.evaluation) {
            (Some(best), Some(evaluation)) => {
                writeln!(f, "Best Move: {}", best)?;
                writeln!(f, "Evaluation: {}", evaluation)?;
            },
            _ => writeln!(f, "Best Move: none")?,
        }
        write!(f, "Candidates:")?;
        for &(ply, score) in &self.candidates {
            write!(f, "\n  {}\t{}", ply, score)?;
        }
        write!(f, "\nStatistics:\n{}", self.statistics)
    }
}

pub use self::minimax::{MinimaxSearch, Statistics, StatisticsLevel};

mod minimax;
