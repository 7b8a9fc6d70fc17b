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

use std::fmt;

use super::{Board, Mark, Move, Outcome, SIZE};

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Outcome::Win(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "Cat's game!"),
            Outcome::Ongoing => write!(f, "Game in progress"),
        }
    }
}

/// Empty cells show the number a player types to claim them.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..SIZE {
                let index = row * SIZE + column;
                match self.cells[index] {
                    Some(mark) => write!(f, "[{}]", mark)?,
                    None => write!(f, "[{}]", index + 1)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::super::Board;

    #[test]
    fn test_board_display() {
        let board: Board = "X.O/.X./...".parse().unwrap();
        assert_eq!(board.to_string(), "[X][2][O]\n[4][X][6]\n[7][8][9]");
    }
}
