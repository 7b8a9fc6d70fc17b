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

//! Exhaustive minimax with alpha-beta pruning.

use std::cmp;
use std::time::Instant;

use tracing::{debug, trace};

use crate::analysis::Score;
use crate::analysis::search::{Analysis, Search};
use crate::board::{Board, Mark, Move, Outcome};

/// A full-depth minimax search.
///
/// The root moves are each searched with a fresh window, so every candidate
/// score is exact.  Below the root, alpha-beta cutoffs skip siblings that
/// cannot change the result.
///
/// # Example
///
/// ```rust
/// use noughts::{Board, Mark, MinimaxSearch, Search};
/// use noughts::analysis::Score;
///
/// let mut board = Board::new();
/// let analysis = MinimaxSearch::new().search(&mut board, Mark::X);
/// assert_eq!(analysis.evaluation, Some(Score(0)));
/// assert_eq!(board, Board::new());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxSearch;

impl MinimaxSearch {
    pub fn new() -> MinimaxSearch {
        MinimaxSearch
    }
}

impl Search for MinimaxSearch {
    fn search(&mut self, board: &mut Board, mark: Mark) -> Analysis {
        let start = Instant::now();
        let state = board.clone();

        let mut statistics = Statistics::new();
        let mut candidates = Vec::new();
        let mut best: Option<(Move, Score)> = None;

        if !board.outcome().is_terminal() {
            let mut context = Context {
                board,
                mark,
                statistics: &mut statistics,
            };

            for ply in context.board.legal_moves() {
                context.board.play(mark, ply);
                let score = context.minimax(0, Score::min(), Score::max(), false);
                context.board.undo(ply);

                debug!(row = ply.row(), column = ply.column(), score = score.0, "candidate");
                candidates.push((ply, score));

                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((ply, score));
                }
            }
        }

        statistics.time = start.elapsed().as_secs_f32();

        trace!(
            %mark,
            visited = statistics.totals().visited,
            cutoffs = statistics.totals().cutoffs,
            time = statistics.time,
            "search complete"
        );

        Analysis {
            board: state,
            mark,
            best: best.map(|(ply, _)| ply),
            evaluation: best.map(|(_, score)| score),
            candidates,
            statistics,
        }
    }
}

/// Everything a single search carries down the tree.
struct Context<'a> {
    board: &'a mut Board,
    mark: Mark,
    statistics: &'a mut Statistics,
}

impl<'a> Context<'a> {
    /// Scores the board from the point of view of `self.mark`.  Maximizing
    /// nodes are where `self.mark` is to move.
    fn minimax(&mut self, depth: u8, mut alpha: Score, mut beta: Score, maximizing: bool) -> Score {
        self.statistics.level(depth).visited += 1;

        match self.board.outcome() {
            Outcome::Draw => {
                self.statistics.level(depth).evaluated += 1;
                return Score::null();
            },
            // Whoever moved last made the line.
            Outcome::Win(_) => {
                self.statistics.level(depth).evaluated += 1;
                return if maximizing {
                    Score::lose(depth)
                } else {
                    Score::win(depth)
                };
            },
            Outcome::Ongoing => (),
        }

        let mark = if maximizing {
            self.mark
        } else {
            self.mark.opponent()
        };

        let mut best = if maximizing {
            Score::min()
        } else {
            Score::max()
        };

        for ply in self.board.legal_moves() {
            self.board.play(mark, ply);
            let score = self.minimax(depth + 1, alpha, beta, !maximizing);
            self.board.undo(ply);

            if maximizing {
                best = cmp::max(best, score);
                if best >= beta {
                    self.statistics.level(depth).cutoffs += 1;
                    break;
                }
                alpha = cmp::max(alpha, best);
            } else {
                best = cmp::min(best, score);
                if best <= alpha {
                    self.statistics.level(depth).cutoffs += 1;
                    break;
                }
                beta = cmp::min(beta, best);
            }
        }

        best
    }
}

pub use self::statistics::{Statistics, StatisticsLevel};

mod statistics;

#[cfg(test)]
mod test {
    use crate::analysis::Score;
    use crate::analysis::search::Search;
    use crate::board::{Board, Mark, Move};
    use super::MinimaxSearch;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    fn at(row: usize, column: usize) -> Move {
        Move::new(row, column).unwrap()
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        for notation in &[".../.../...", "X../.O./...", "XO./.X./..O", "XOX/OXO/..."] {
            let mut board = board(notation);
            let before = board.clone();
            let mark = board.next_mark(Mark::X);
            MinimaxSearch::new().search(&mut board, mark);
            assert_eq!(board, before, "board {} changed", notation);
        }
    }

    #[test]
    fn test_candidates_cover_every_legal_move() {
        let mut board = board("X../.O./...");
        let analysis = MinimaxSearch::new().search(&mut board, Mark::X);
        let examined = analysis.candidates.iter().map(|&(ply, _)| ply).collect::<Vec<_>>();
        assert_eq!(examined, board.legal_moves());
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let mut board = board("XX./O../...");
        let analysis = MinimaxSearch::new().search(&mut board, Mark::O);
        assert_eq!(analysis.best, Some(at(0, 2)));

        for &(ply, score) in &analysis.candidates {
            if ply != at(0, 2) {
                assert_eq!(score, Score::lose(1), "{} should lose at once", ply);
            }
        }
    }

    #[test]
    fn test_prefers_faster_win() {
        // (0, 2) forks and wins two plies later; (1, 2) wins now.
        let mut board = board("O../XX./..O");
        let analysis = MinimaxSearch::new().search(&mut board, Mark::X);
        assert_eq!(analysis.best, Some(at(1, 2)));
        assert_eq!(analysis.evaluation, Some(Score::win(0)));

        let fork = analysis.candidates.iter().find(|&&(ply, _)| ply == at(0, 2)).unwrap();
        assert_eq!(fork.1, Score::win(2));
    }

    #[test]
    fn test_statistics_are_recorded() {
        let mut board = Board::new();
        let analysis = MinimaxSearch::new().search(&mut board, Mark::X);
        let totals = analysis.statistics.totals();
        assert!(totals.visited > 0);
        assert!(totals.evaluated > 0);
        assert!(totals.cutoffs > 0);
        assert!(totals.evaluated <= totals.visited);
    }
}
