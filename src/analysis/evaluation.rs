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
use std::ops::Neg;

use crate::board::CELLS;

/// The base value of a win, before it is discounted by depth.
const WIN: i32 = 10;

/// Larger than any score the search can produce.  Used to open the alpha-beta window.
const MAX: i32 = 100_000;

// A win found on the last possible ply must still outrank a draw.  This only
// holds while the board is small enough.
const _: () = assert!(WIN > CELLS as i32);

/// The value of a position from the searching side's point of view.
///
/// Positive scores are forced wins, negative scores are forced losses, and
/// zero is a draw.  Wins are worth less the deeper they are found, so the
/// search prefers quick wins and slow losses.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Score(pub i32);

impl Score {
    /// An even position.
    pub fn null() -> Score {
        Score(0)
    }

    /// A win for the searching side, found `depth` plies below the root reply.
    pub fn win(depth: u8) -> Score {
        Score(WIN - depth as i32)
    }

    /// A win for the opponent, found `depth` plies below the root reply.
    pub fn lose(depth: u8) -> Score {
        -Score::win(depth)
    }

    /// The upper sentinel.  Safely negatable.
    pub fn max() -> Score {
        Score(MAX)
    }

    /// The lower sentinel.
    pub fn min() -> Score {
        -Score::max()
    }

    pub fn is_win(&self) -> bool {
        self.0 > 0 && self.0 <= WIN
    }

    pub fn is_lose(&self) -> bool {
        (-*self).is_win()
    }

    /// Returns `true` if this score is either a win or a loss.
    pub fn is_end(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if self.is_win() {
            write!(f, " (Win)")
        } else if self.is_lose() {
            write!(f, " (Lose)")
        } else {
            Ok(())
        }
    }
}
