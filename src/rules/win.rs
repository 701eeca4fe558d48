//! Win condition checking
//!
//! Freestyle rules: five or more stones in a row wins, overlines included.
//! A win can only be created by the stone just played, so the check looks
//! at that cell alone.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::line::{run_length, SCAN_REACH};

/// Stones in a row needed to win
pub const WIN_LENGTH: u32 = 5;

/// Check whether the stone at `pos` completes five in a row for `stone`.
///
/// Call right after placing at `pos`.
#[inline]
#[must_use]
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, pos, dir, stone) >= WIN_LENGTH)
}

/// Cells of the first winning line through `pos`, in order along the axis.
///
/// Bounded by the scan reach, so at most nine cells. `None` when `pos`
/// does not complete five in a row.
#[must_use]
pub fn winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<Vec<Pos>> {
    let size = board.size();

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        for step in 1..=SCAN_REACH {
            match pos.offset(-dr, -dc, step, size) {
                Some(prev) if board.get(prev) == stone => line.insert(0, prev),
                _ => break,
            }
        }

        // Extend in positive direction
        for step in 1..=SCAN_REACH {
            match pos.offset(dr, dc, step, size) {
                Some(next) if board.get(next) == stone => line.push(next),
                _ => break,
            }
        }

        if line.len() >= WIN_LENGTH as usize {
            return Some(line);
        }
    }
    None
}
