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

use std::str::FromStr;

use crate::error::Error;
use super::{Board, Mark, Move, CELLS, SIZE};

/// Parses a cell number, 1 through 9, counted from the top left.
impl FromStr for Move {
    type Err = Error;

    fn from_str(source: &str) -> Result<Move, Error> {
        match source.trim().parse::<usize>() {
            Ok(number) if number >= 1 && number <= CELLS => Move::from_index(number - 1),
            _ => Err(Error::ParseMove(source.to_string())),
        }
    }
}

/// Parses rows separated by `/`, e.g. `XX./OO./...`.  `.`, `_`, and `-` are
/// empty cells.  No attempt is made to check that the position is reachable.
impl FromStr for Board {
    type Err = Error;

    fn from_str(source: &str) -> Result<Board, Error> {
        let error = || Error::ParseBoard(source.to_string());

        let rows = source.trim().split('/').collect::<Vec<_>>();
        if rows.len() != SIZE {
            return Err(error());
        }

        let mut cells = [None; CELLS];
        for (row, text) in rows.iter().enumerate() {
            let symbols = text.chars().collect::<Vec<_>>();
            if symbols.len() != SIZE {
                return Err(error());
            }

            for (column, symbol) in symbols.into_iter().enumerate() {
                cells[row * SIZE + column] = match symbol {
                    'X' | 'x' => Some(Mark::X),
                    'O' | 'o' => Some(Mark::O),
                    '.' | '_' | '-' => None,
                    _ => return Err(error()),
                };
            }
        }

        Ok(Board::from_cells(cells))
    }
}
