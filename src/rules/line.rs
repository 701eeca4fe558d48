//! Directional line scanning
//!
//! Both the evaluator and win detection look at the stones lined up with a
//! cell along one of the four axes. Scans reach at most [`SCAN_REACH`]
//! cells in each sense, so a run through a cell never exceeds
//! `2 * SCAN_REACH + 1`.

use crate::board::{Board, Cell, Pos, Stone, DIRECTIONS};

/// Maximum number of steps scanned in each sense from the starting cell
pub const SCAN_REACH: i32 = 4;

/// Stones lined up with a cell along one axis, as seen by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRun {
    /// Contiguous same-color stones, including the starting cell
    pub count: u32,
    /// Senses (0-2) whose scan stopped on an empty cell
    pub open_ends: u8,
}

/// How a one-sided walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// Hit an empty cell
    Open,
    /// Hit the edge, an opponent stone, or ran out of reach
    Closed,
}

/// Walk from `pos` along `(dr, dc)` counting `stone`s, up to `SCAN_REACH`
/// steps. Returns the count and what ended the walk.
#[inline]
fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> (u32, Stop) {
    let mut count = 0;
    for step in 1..=SCAN_REACH {
        let Some(next) = pos.offset(dr, dc, step, board.size()) else {
            return (count, Stop::Closed);
        };
        match board.get(next) {
            c if c == stone => count += 1,
            Cell::Empty => return (count, Stop::Open),
            _ => return (count, Stop::Closed),
        }
    }
    (count, Stop::Closed)
}

/// Scan both senses of one axis from `pos`, recording open ends.
///
/// The starting cell always counts as one stone. Each sense stops at the
/// board edge, an opponent stone, or the first empty cell; the empty cell
/// is not counted but marks that sense as open.
#[must_use]
pub fn scan_line(board: &Board, pos: Pos, (dr, dc): (i32, i32), stone: Stone) -> LineRun {
    let (forward, fwd_stop) = walk(board, pos, dr, dc, stone);
    let (backward, bwd_stop) = walk(board, pos, -dr, -dc, stone);

    let open_ends = u8::from(fwd_stop == Stop::Open) + u8::from(bwd_stop == Stop::Open);
    LineRun {
        count: 1 + forward + backward,
        open_ends,
    }
}

/// Contiguous run of `stone` through `pos` along one axis, ignoring
/// whether the ends are open.
#[inline]
#[must_use]
pub fn run_length(board: &Board, pos: Pos, (dr, dc): (i32, i32), stone: Stone) -> u32 {
    let (forward, _) = walk(board, pos, dr, dc, stone);
    let (backward, _) = walk(board, pos, -dr, -dc, stone);
    1 + forward + backward
}

/// Longest run through `pos` over the four axes.
/// Each axis is scanned independently from the board as it stands.
#[must_use]
pub fn longest_run(board: &Board, pos: Pos, stone: Stone) -> u32 {
    DIRECTIONS
        .iter()
        .map(|&dir| run_length(board, pos, dir, stone))
        .max()
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HORIZONTAL: (i32, i32) = (0, 1);
    const VERTICAL: (i32, i32) = (1, 0);
    const DIAG: (i32, i32) = (1, 1);
    const ANTI_DIAG: (i32, i32) = (1, -1);

    fn row_board(cols: &[u8], stone: Stone) -> Board {
        let mut board = Board::new();
        for &c in cols {
            board.place(Pos::new(9, c), stone);
        }
        board
    }

    #[test]
    fn test_single_stone_open_both_ways() {
        let board = row_board(&[9], Stone::Black);
        let run = scan_line(&board, Pos::new(9, 9), HORIZONTAL, Stone::Black);
        assert_eq!(run, LineRun { count: 1, open_ends: 2 });
    }

    #[test]
    fn test_open_three() {
        let board = row_board(&[8, 9, 10], Stone::Black);
        for c in 8..=10 {
            let run = scan_line(&board, Pos::new(9, c), HORIZONTAL, Stone::Black);
            assert_eq!(run, LineRun { count: 3, open_ends: 2 });
        }
        // Across the row the three is invisible
        let run = scan_line(&board, Pos::new(9, 9), VERTICAL, Stone::Black);
        assert_eq!(run, LineRun { count: 1, open_ends: 2 });
    }

    #[test]
    fn test_blocked_by_opponent() {
        let mut board = row_board(&[8, 9, 10], Stone::Black);
        board.place(Pos::new(9, 11), Stone::White);
        let run = scan_line(&board, Pos::new(9, 9), HORIZONTAL, Stone::Black);
        assert_eq!(run, LineRun { count: 3, open_ends: 1 });
    }

    #[test]
    fn test_blocked_by_edge() {
        let board = row_board(&[0, 1], Stone::White);
        let run = scan_line(&board, Pos::new(9, 0), HORIZONTAL, Stone::White);
        assert_eq!(run, LineRun { count: 2, open_ends: 1 });
    }

    #[test]
    fn test_gap_stops_scan() {
        // X X . X : the stone past the gap is not counted
        let board = row_board(&[5, 6, 8], Stone::Black);
        let run = scan_line(&board, Pos::new(9, 5), HORIZONTAL, Stone::Black);
        assert_eq!(run, LineRun { count: 2, open_ends: 2 });
        assert_eq!(run_length(&board, Pos::new(9, 5), HORIZONTAL, Stone::Black), 2);
    }

    #[test]
    fn test_reach_is_four_each_way() {
        let cols: Vec<u8> = (0..19).collect();
        let board = row_board(&cols, Stone::Black);
        let run = scan_line(&board, Pos::new(9, 9), HORIZONTAL, Stone::Black);
        assert_eq!(run, LineRun { count: 9, open_ends: 0 });
        assert_eq!(run_length(&board, Pos::new(9, 9), HORIZONTAL, Stone::Black), 9);
    }

    #[test]
    fn test_diagonals() {
        let mut board = Board::new();
        for i in 0..3u8 {
            board.place(Pos::new(5 + i, 5 + i), Stone::White);
            board.place(Pos::new(5 + i, 15 - i), Stone::Black);
        }
        assert_eq!(run_length(&board, Pos::new(6, 6), DIAG, Stone::White), 3);
        assert_eq!(run_length(&board, Pos::new(6, 14), ANTI_DIAG, Stone::Black), 3);
        assert_eq!(longest_run(&board, Pos::new(7, 7), Stone::White), 3);
        assert_eq!(longest_run(&board, Pos::new(7, 7), Stone::Black), 1);
    }

    /// Unbounded contiguous counts on each side of `pos` along one axis
    fn brute_force_sides(board: &Board, pos: Pos, (dr, dc): (i32, i32), stone: Stone) -> [u32; 2] {
        let mut sides = [0; 2];
        for (side, sign) in sides.iter_mut().zip([1, -1]) {
            let mut step = 1;
            while let Some(p) = pos.offset(dr * sign, dc * sign, step, board.size()) {
                if board.get(p) != stone {
                    break;
                }
                *side += 1;
                step += 1;
            }
        }
        sides
    }

    #[test]
    fn test_run_length_matches_brute_force() {
        const WIN: u32 = 5;
        // Knuth MMIX LCG, fixed seed for reproducible boards
        let mut seed: u64 = 0x0DDB_1A5E_5BAD_5EED;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            seed >> 33
        };

        for _ in 0..40 {
            let mut board = Board::with_size(11);
            for r in 0..11u8 {
                for c in 0..11u8 {
                    match next_rand() % 3 {
                        0 => {
                            board.place(Pos::new(r, c), Stone::Black);
                        }
                        1 => {
                            board.place(Pos::new(r, c), Stone::White);
                        }
                        _ => {}
                    }
                }
            }

            for (pos, stone) in board.occupied() {
                for &dir in &DIRECTIONS {
                    let [fwd, bwd] = brute_force_sides(&board, pos, dir, stone);
                    let brute = 1 + fwd + bwd;
                    let scanned = run_length(&board, pos, dir, stone);
                    assert_eq!(scanned, 1 + fwd.min(4) + bwd.min(4), "{pos} {dir:?}");
                    assert!(scanned >= brute.min(WIN), "{pos} {dir:?}: {scanned} < {brute}");
                    assert_eq!(scanned >= WIN, brute >= WIN);
                }
            }
        }
    }
}
