//! Engine configuration
//!
//! Everything the engine accepts at construction: board size, search depth,
//! cutoff policy, whose viewpoint the search maximizes, and the scoring
//! weights. Loadable from JSON; missing fields take the reference values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::eval::ScoreTable;
use crate::search::CutoffPolicy;

/// Deepest search accepted; the tree is brute force, so every extra ply
/// multiplies the work by the number of empty cells.
pub const MAX_DEPTH: u8 = 6;

/// Default look-ahead for the automated side
pub const DEFAULT_DEPTH: u8 = 2;

/// Whose stones the engine places at maximizing nodes and scores at leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    /// The side to move searches as its opponent: it picks the cell the
    /// opponent would most like to take.
    #[default]
    Opponent,
    /// The side to move searches for its own best cell
    Mover,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board size {0} outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("search depth {0} outside 1..={max}", max = MAX_DEPTH)]
    InvalidDepth(u8),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: usize,
    pub depth: u8,
    pub cutoff: CutoffPolicy,
    pub perspective: Perspective,
    /// Split root moves across the rayon pool
    pub parallel: bool,
    pub scores: ScoreTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            depth: DEFAULT_DEPTH,
            cutoff: CutoffPolicy::RowLocal,
            perspective: Perspective::Opponent,
            parallel: false,
            scores: ScoreTable::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
