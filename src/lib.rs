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

//! A perfect tic-tac-toe opponent.
//!
//! The game is small enough to search to the end from any position, so the
//! computer never guesses: every move it makes comes from a full minimax
//! search with alpha-beta pruning.
//!
//! # Implementation
//!
//! The pieces are `Board`, which holds the marks and answers questions about
//! them, and `MinimaxSearch`, which borrows a board, plays and undoes moves on
//! it in place, and hands it back unchanged along with an `Analysis`.
//!
//! `Game` ties the two together for a session against a human, with each
//! change requested through a `Command`.
//!
//! # Example
//!
//! ```rust
//! use noughts::{find_best_move, Board, Mark, Outcome};
//!
//! let mut board = Board::new();
//! let mut mark = Mark::X;
//!
//! while let Some(ply) = find_best_move(&mut board, mark) {
//!     board.play(mark, ply);
//!     mark = mark.opponent();
//! }
//!
//! assert_eq!(board.outcome(), Outcome::Draw);
//! ```

pub mod analysis;
pub mod board;
pub mod game;

pub use self::analysis::search::{find_best_move, Analysis, MinimaxSearch, Search};
pub use self::board::{Board, Mark, Move, Outcome};
pub use self::error::{Error, Result};
pub use self::game::{Command, Game, Phase, Settings, Step, Turn};

mod error;
