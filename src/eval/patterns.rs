//! Pattern scores for Gomoku evaluation
//!
//! `PatternScore` holds the reference weights; `ScoreTable` is the
//! configurable copy the evaluator actually reads.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos};
use crate::rules::LineRun;

/// Reference pattern scores
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, open or not
    pub const FIVE: f64 = 10_000.0;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: f64 = 9_000.0;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: f64 = 4_500.0;

    /// Open three: _OOO_
    pub const OPEN_THREE: f64 = 4_000.0;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: f64 = 3_500.0;

    /// Open two: _OO_
    pub const OPEN_TWO: f64 = 2_000.0;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: f64 = 1_500.0;

    /// Lone stone with space on both sides
    pub const OPEN_ONE: f64 = 100.0;

    /// Center bonus for a stone on the center cell
    pub const CENTER_MAX: f64 = 10.0;
    /// Center bonus lost per step of Manhattan distance
    pub const CENTER_STEP: f64 = 0.1;
    /// Center bonus never drops below this
    pub const CENTER_FLOOR: f64 = 0.1;
}

/// How an open three (three in a row, both ends empty) enters a cell's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenThreeRule {
    /// That direction's term is the bare `open_three` value, without the
    /// center bonus; the other directions still count.
    #[default]
    Direction,
    /// The first open three found is the whole cell's score: terms already
    /// summed and the remaining directions are dropped.
    Cell,
    /// Scored like every other run, value plus bonus
    Normalized,
}

/// Scoring weights used by the evaluator.
///
/// Fully-blocked runs shorter than five score nothing, as does a lone
/// stone with fewer than two open ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub five: f64,
    pub open_four: f64,
    pub closed_four: f64,
    pub open_three: f64,
    pub closed_three: f64,
    pub open_two: f64,
    pub closed_two: f64,
    pub open_one: f64,
    pub center_max: f64,
    pub center_step: f64,
    pub center_floor: f64,
    pub open_three_rule: OpenThreeRule,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            five: PatternScore::FIVE,
            open_four: PatternScore::OPEN_FOUR,
            closed_four: PatternScore::CLOSED_FOUR,
            open_three: PatternScore::OPEN_THREE,
            closed_three: PatternScore::CLOSED_THREE,
            open_two: PatternScore::OPEN_TWO,
            closed_two: PatternScore::CLOSED_TWO,
            open_one: PatternScore::OPEN_ONE,
            center_max: PatternScore::CENTER_MAX,
            center_step: PatternScore::CENTER_STEP,
            center_floor: PatternScore::CENTER_FLOOR,
            open_three_rule: OpenThreeRule::Direction,
        }
    }
}

impl ScoreTable {
    /// Score of a run, without the center bonus
    #[must_use]
    pub fn run_score(&self, run: LineRun) -> f64 {
        match (run.count, run.open_ends) {
            (5.., _) => self.five,
            (4, 2) => self.open_four,
            (4, 1) => self.closed_four,
            (3, 2) => self.open_three,
            (3, 1) => self.closed_three,
            (2, 2) => self.open_two,
            (2, 1) => self.closed_two,
            (1, 2) => self.open_one,
            _ => 0.0,
        }
    }

    /// Center bonus: `max(floor, max - d * step)` where `d` is the
    /// Manhattan distance from `pos` to the board center.
    #[must_use]
    pub fn center_bonus(&self, board: &Board, pos: Pos) -> f64 {
        let center = board.center();
        let dist = pos.row.abs_diff(center.row) as u32 + pos.col.abs_diff(center.col) as u32;
        self.center_floor
            .max(self.center_max - f64::from(dist) * self.center_step)
    }
}
