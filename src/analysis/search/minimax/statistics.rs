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

use std::cmp;
use std::fmt;

/// Counters for one depth of the tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StatisticsLevel {
    /// Nodes entered.
    pub visited: u32,
    /// Nodes that were won or drawn and scored without searching further.
    pub evaluated: u32,
    /// Nodes whose remaining moves were skipped by an alpha-beta cutoff.
    pub cutoffs: u32,
}

impl StatisticsLevel {
    pub fn new() -> StatisticsLevel {
        StatisticsLevel::default()
    }

    fn values(&self) -> [u32; 3] {
        [self.visited, self.evaluated, self.cutoffs]
    }
}

/// Statistics from one search, indexed by depth below the root reply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    pub depth: Vec<StatisticsLevel>,
    /// Seconds spent searching.
    pub time: f32,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// Returns the counters for `depth`, growing the table as needed.
    pub(crate) fn level(&mut self, depth: u8) -> &mut StatisticsLevel {
        let depth = depth as usize;
        if self.depth.len() <= depth {
            self.depth.resize(depth + 1, StatisticsLevel::new());
        }
        &mut self.depth[depth]
    }

    /// The counters summed over every depth.
    pub fn totals(&self) -> StatisticsLevel {
        self.depth.iter().fold(StatisticsLevel::new(), |mut totals, level| {
            totals.visited += level.visited;
            totals.evaluated += level.evaluated;
            totals.cutoffs += level.cutoffs;
            totals
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let titles = ["Visited:", "Evaluated:", "Cutoffs:"];
        let title_width = titles.iter().map(|title| title.len()).max().unwrap_or(0) + 1;

        let totals = self.totals().values();
        let total_width = totals.iter()
            .map(|total| total.to_string().len())
            .fold("Total".len(), cmp::max);

        let column_widths = self.depth.iter().enumerate().map(|(depth, level)|
            level.values().iter()
                .map(|value| value.to_string().len())
                .fold(depth.to_string().len(), cmp::max)
        ).collect::<Vec<_>>();

        write!(f, "  {0:1$}", "Depth:", title_width)?;
        for (depth, width) in column_widths.iter().enumerate() {
            write!(f, "  {0:>1$}", depth, width)?;
        }
        write!(f, "  {0:>1$}", "Total", total_width)?;

        for (i, title) in titles.iter().enumerate() {
            write!(f, "\n  {0:1$}", title, title_width)?;
            for (level, width) in self.depth.iter().zip(&column_widths) {
                write!(f, "  {0:>1$}", level.values()[i], width)?;
            }
            write!(f, "  {0:>1$}", totals[i], total_width)?;
        }

        write!(f, "\n  {0:1$}  {2:.3}s", "Time:", title_width, self.time)
    }
}
