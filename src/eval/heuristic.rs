//! Heuristic evaluation function for Gomoku board positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! Every stone on the board is scored by the runs passing through it in
//! the four directions plus a center bonus; stones of the evaluated side
//! add to the total and opponent stones subtract.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::scan_line;

use super::patterns::{OpenThreeRule, ScoreTable};

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
/// - An empty board scores exactly zero
///
/// Stones are visited in row-major order. Each stone is scored by its
/// owner's table lookups, so `evaluate(b, Black) == -evaluate(b, White)`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone, table: &ScoreTable) -> f64 {
    let mut score = 0.0;
    for (pos, stone) in board.occupied() {
        if stone == color {
            score += evaluate_position(board, pos, stone, table);
        } else {
            score -= evaluate_position(board, pos, stone, table);
        }
    }
    score
}

/// Pattern score of one stone, as seen by the stone's owner.
///
/// Sums, over the four directions, the run score plus the center bonus.
/// Open threes follow `table.open_three_rule`.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone, table: &ScoreTable) -> f64 {
    let bonus = table.center_bonus(board, pos);
    let mut score = 0.0;

    for &dir in &DIRECTIONS {
        let run = scan_line(board, pos, dir, color);
        match (table.open_three_rule, run.count, run.open_ends) {
            (OpenThreeRule::Cell, 3, 2) => return table.open_three,
            (OpenThreeRule::Direction, 3, 2) => score += table.open_three,
            _ => score += table.run_score(run) + bonus,
        }
    }
    score
}
