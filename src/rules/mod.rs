//! Game rules for freestyle Gomoku
//!
//! This module implements:
//! - Directional line scanning (run length and open ends)
//! - Win detection (five or more in a row through the last move)

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{longest_run, run_length, scan_line, LineRun, SCAN_REACH};
pub use win::{check_win, winning_line, WIN_LENGTH};
