extern crate fnv;
extern crate noughts;

use fnv::FnvHashSet;

use noughts::{find_best_move, Board, Mark, Outcome};

/// Every board that can come up in a game where X opens, including the empty
/// board and every finished one.
fn reachable() -> FnvHashSet<Board> {
    fn visit(board: &mut Board, mark: Mark, seen: &mut FnvHashSet<Board>) {
        if !seen.insert(board.clone()) || board.outcome().is_terminal() {
            return;
        }

        for ply in board.legal_moves() {
            board.play(mark, ply);
            visit(board, mark.opponent(), seen);
            board.undo(ply);
        }
    }

    let mut seen = FnvHashSet::default();
    visit(&mut Board::new(), Mark::X, &mut seen);
    seen
}

/// The line check written out by hand, without line sums.
fn has_line(board: &Board, mark: Mark) -> bool {
    let c = board.cells();
    let lines = [
        (0, 1, 2), (3, 4, 5), (6, 7, 8),
        (0, 3, 6), (1, 4, 7), (2, 5, 8),
        (0, 4, 8), (2, 4, 6),
    ];
    lines.iter().any(|&(a, b, d)| c[a] == Some(mark) && c[b] == Some(mark) && c[d] == Some(mark))
}

#[test]
fn test_reachable_count() {
    assert_eq!(reachable().len(), 5478);
}

#[test]
fn test_outcome_matches_lines() {
    for board in reachable() {
        let x = has_line(&board, Mark::X);
        let o = has_line(&board, Mark::O);
        assert!(!(x && o), "both sides won on\n{}", board);

        let expected = if x {
            Outcome::Win(Mark::X)
        } else if o {
            Outcome::Win(Mark::O)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        };

        assert_eq!(board.outcome(), expected, "on\n{}", board);
        assert_eq!(board.turns(), board.cells().iter().filter(|cell| cell.is_some()).count());
    }
}

#[test]
fn test_best_move_is_always_legal() {
    for board in reachable() {
        let mark = board.next_mark(Mark::X);
        let mut searched = board.clone();
        let best = find_best_move(&mut searched, mark);

        assert_eq!(searched, board, "search changed\n{}", board);

        match best {
            Some(ply) => {
                assert!(!board.outcome().is_terminal());
                assert!(board.is_legal(ply), "{} is not legal on\n{}", ply, board);
            },
            None => assert!(board.outcome().is_terminal(), "no move on\n{}", board),
        }
    }
}
