//! Evaluation module for Gomoku positions
//!
//! Scores a board from one player's side. The evaluation considers:
//! - Runs of stones through every occupied cell (fives, fours, threes, twos)
//! - Whether each run's ends are open or blocked
//! - A center bonus favouring stones near the middle of the board

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_position};
pub use patterns::{OpenThreeRule, PatternScore, ScoreTable};
