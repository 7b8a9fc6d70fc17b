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

//! The 3x3 board and the marks that go on it.

use crate::error::{Error, Result};

/// The length of a row or column.
pub const SIZE: usize = 3;

/// The number of cells on the board, which is also the longest possible game in plies.
pub const CELLS: usize = SIZE * SIZE;

/// Every row, column, and diagonal, as cell indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Either X or O.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark's weight in a line sum.  The two marks are opposite in sign, so
    /// only three identical marks can reach a sum of 3 or -3.
    pub fn value(self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

/// A cell on the board, addressed by row and column.
///
/// A `Move` can only be built from on-board coordinates, so whether it can be
/// played depends only on the cell being empty.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Move {
    row: usize,
    column: usize,
}

impl Move {
    /// Creates a move, rejecting coordinates outside `0..3`.
    pub fn new(row: usize, column: usize) -> Result<Move> {
        if row >= SIZE || column >= SIZE {
            return Err(Error::OutOfBounds { row, column });
        }
        Ok(Move { row, column })
    }

    /// Creates a move from a row-major cell index in `0..9`.
    pub fn from_index(index: usize) -> Result<Move> {
        Move::new(index / SIZE, index % SIZE)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The row-major cell index.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.column
    }
}

/// What the cells of a board add up to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    Win(Mark),
    Draw,
    Ongoing,
}

impl Outcome {
    /// Returns `true` for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn winner(&self) -> Option<Mark> {
        match *self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// The 3x3 game board.
///
/// The board records marks and counts them; it does not know whose turn it is.
/// Alternation is the business of whoever owns the board.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
    turns: u8,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board::default()
    }

    pub(crate) fn from_cells(cells: [Option<Mark>; CELLS]) -> Board {
        let turns = cells.iter().filter(|cell| cell.is_some()).count() as u8;
        Board { cells, turns }
    }

    /// Returns the mark in the cell at `ply`, if any.
    pub fn get(&self, ply: Move) -> Option<Mark> {
        self.cells[ply.index()]
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    /// The number of marks on the board.
    pub fn turns(&self) -> usize {
        self.turns as usize
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Returns the mark to move, given the mark that opened the game.
    pub fn next_mark(&self, first: Mark) -> Mark {
        if self.turns % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    }

    /// Sums each line and reports a win for any line at 3 or -3.  Failing
    /// that, a full board is a draw.
    pub fn outcome(&self) -> Outcome {
        for line in LINES.iter() {
            let sum: i8 = line
                .iter()
                .map(|&index| self.cells[index].map_or(0, Mark::value))
                .sum();

            match sum {
                3 => return Outcome::Win(Mark::X),
                -3 => return Outcome::Win(Mark::O),
                _ => (),
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Every empty cell, top row first, left to right.  The search breaks ties
    /// in this order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(CELLS - self.turns());
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Appends every empty cell to `moves`, in the same order as `legal_moves`.
    pub fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                moves.push(Move {
                    row: index / SIZE,
                    column: index % SIZE,
                });
            }
        }
    }

    pub fn is_legal(&self, ply: Move) -> bool {
        self.cells[ply.index()].is_none()
    }

    /// Places `mark` at `ply`.
    ///
    /// The cell must be empty.  This is only checked in debug builds.
    pub fn play(&mut self, mark: Mark, ply: Move) {
        let cell = &mut self.cells[ply.index()];
        debug_assert!(cell.is_none(), "{} played on occupied cell {}", mark, ply);

        if cell.is_none() {
            self.turns += 1;
        }
        *cell = Some(mark);
    }

    /// Clears the cell at `ply`, reversing an earlier `play`.
    pub fn undo(&mut self, ply: Move) {
        let cell = &mut self.cells[ply.index()];
        debug_assert!(cell.is_some(), "undo on empty cell {}", ply);

        if cell.take().is_some() {
            self.turns -= 1;
        }
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [None; CELLS];
        self.turns = 0;
    }
}

mod display;
mod parse;
