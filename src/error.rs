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

use thiserror::Error;

use crate::board::{Mark, Move};

/// Everything that can be rejected at the edges of the crate.
///
/// `Board::play` and `Board::undo` never produce these; they trust their caller.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("coordinates ({row}, {column}) are off the board")]
    OutOfBounds { row: usize, column: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Move),

    #[error("invalid move {0:?}, expected a cell number from 1 to 9")]
    ParseMove(String),

    #[error("invalid board {0:?}")]
    ParseBoard(String),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("the round is over")]
    RoundOver,

    #[error("the round is still in progress")]
    RoundInProgress,

    #[error("the session has ended")]
    SessionOver,

    #[error("no legal moves remain")]
    NoMoves,
}

pub type Result<T> = std::result::Result<T, Error>;
