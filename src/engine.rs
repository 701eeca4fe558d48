//! Main AI engine wrapping the search
//!
//! The engine owns the configuration and a searcher, and answers "where
//! should this side play" for a board the caller keeps. The caller's
//! board is never modified; the search runs on a working copy.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig { board_size: 9, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config).unwrap();
//! let mut board = Board::with_size(9);
//! board.place(Pos::new(4, 4), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::{ConfigError, EngineConfig, Perspective};
use crate::search::{SearchResult, SearchStats, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the move from the searched perspective
    pub score: f64,
    /// Player the leaves were scored for
    pub perspective: Stone,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl MoveResult {
    fn from_search(result: SearchResult, perspective: Stone, depth: u8, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            perspective,
            depth,
            time_ms,
            nodes: result.stats.nodes,
            stats: result.stats,
        }
    }
}

/// Main AI Engine for Gomoku.
#[derive(Debug)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Create a new AI engine with the reference configuration:
    /// 19x19 board, depth 2, row-local cutoffs, opponent perspective.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: EngineConfig) -> Self {
        let searcher = Searcher::new(Stone::Black, config.cutoff, config.scores.clone());
        Self { config, searcher }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Player whose stones the search places at maximizing nodes when
    /// `to_move` is the side asking for a move
    #[must_use]
    pub fn perspective_for(&self, to_move: Stone) -> Stone {
        match self.config.perspective {
            Perspective::Opponent => to_move.opponent(),
            Perspective::Mover => to_move,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if the board has no empty cell.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, to_move: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, to_move).best_move
    }

    /// Get the best move with detailed search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board, to_move: Stone) -> MoveResult {
        let start = Instant::now();
        let depth = self.config.depth;
        let perspective = self.perspective_for(to_move);
        self.searcher.set_perspective(perspective);

        let result = if self.config.parallel {
            self.searcher.search_parallel(board, depth)
        } else {
            let mut work_board = board.clone();
            self.searcher.search_root(&mut work_board, depth)
        };

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            "{} to move: {:?} (score {:.1}, {} nodes, {}ms)",
            to_move, result.best_move, result.score, result.stats.nodes, elapsed
        );
        MoveResult::from_search(result, perspective, depth, elapsed)
    }

    /// Set the search depth, keeping it within `1..=MAX_DEPTH`
    pub fn set_depth(&mut self, depth: u8) -> Result<(), ConfigError> {
        let config = EngineConfig {
            depth,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
