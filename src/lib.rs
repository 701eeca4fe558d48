//! Gomoku move search
//!
//! A freestyle Gomoku engine: a square board, five or more in a row wins,
//! and an automated player that picks its move with a depth-limited
//! minimax search with alpha-beta pruning over a line-pattern heuristic.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning and the win check
//! - [`eval`]: Pattern scores and the static evaluation
//! - [`search`]: Minimax with alpha-beta pruning, sequential and parallel
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Headless game session with turn order and undo
//! - [`config`]: Engine configuration, loadable from JSON
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{check_win, AIEngine, Board, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig { board_size: 9, depth: 1, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config).unwrap();
//! let mut board = Board::with_size(9);
//! board.place(Pos::new(4, 4), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place(pos, Stone::White);
//!     assert!(!check_win(&board, pos, Stone::White));
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod logging;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Cell, Pos, Stone, BOARD_SIZE};
pub use config::{ConfigError, EngineConfig, Perspective};
pub use engine::{AIEngine, MoveResult};
pub use game::{Game, GameError, GameOutcome, MoveOutcome};
pub use rules::check_win;
pub use search::CutoffPolicy;

/// Any error the library reports
#[derive(Debug, thiserror::Error)]
pub enum GomokuError {
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GomokuError>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn occupied_twice() -> Result<Pos> {
        let mut board = Board::with_size(5);
        board.try_place(2, 2, Stone::Black)?;
        Ok(board.try_place(2, 2, Stone::White)?)
    }

    #[test]
    fn test_errors_convert_into_gomoku_error() {
        assert_matches!(
            occupied_twice(),
            Err(GomokuError::Board(BoardError::Occupied(_)))
        );

        let err: GomokuError = ConfigError::InvalidDepth(0).into();
        assert_matches!(err, GomokuError::Config(ConfigError::InvalidDepth(0)));

        let err: GomokuError = GameError::GameOver.into();
        assert_eq!(err.to_string(), "Game error: the game is already over");
    }
}
