//! Headless game session
//!
//! Tracks whose turn it is, commits moves for either side, detects wins
//! and full-board draws, and supports taking moves back. Input devices,
//! rendering and clocks belong to whoever drives the session.

use log::{info, warn};
use thiserror::Error;

use crate::board::{Board, BoardError, Pos, Stone};
use crate::config::{ConfigError, EngineConfig};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::winning_line;

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Five or more in a row through `line`
    Win { winner: Stone, line: Vec<Pos> },
    /// Board filled with no winner
    Draw,
}

/// What a committed move did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on; the other side is to move
    Continue,
    Win(Stone),
    Draw,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("no legal move for {0}")]
    NoLegalMove(Stone),
}

/// A game between two sides, either of which may be the engine
#[derive(Debug)]
pub struct Game {
    board: Board,
    engine: AIEngine,
    current_turn: Stone,
    history: Vec<(Pos, Stone)>,
    outcome: Option<GameOutcome>,
    last_engine_result: Option<MoveResult>,
}

impl Game {
    /// Start a game on an empty board with `first` to move
    pub fn new(config: EngineConfig, first: Stone) -> Result<Self, ConfigError> {
        let engine = AIEngine::with_config(config)?;
        let board = Board::with_size(engine.config().board_size);
        Ok(Self {
            board,
            engine,
            current_turn: first,
            history: Vec::new(),
            outcome: None,
            last_engine_result: None,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Statistics of the engine's most recent move
    #[must_use]
    pub fn last_engine_result(&self) -> Option<&MoveResult> {
        self.last_engine_result.as_ref()
    }

    /// Place the side-to-move's stone at `(row, col)`.
    ///
    /// Occupied and off-board cells are rejected without changing anything.
    pub fn play(&mut self, row: i64, col: i64) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let stone = self.current_turn;
        let pos = self.board.try_place(row, col, stone).inspect_err(|e| {
            warn!("{stone} move rejected: {e}");
        })?;
        Ok(self.commit(pos, stone))
    }

    /// Let the engine choose and play the side-to-move's stone
    pub fn play_engine(&mut self) -> Result<(Pos, MoveOutcome), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let stone = self.current_turn;
        let result = self.engine.get_move_with_stats(&self.board, stone);
        let pos = result
            .best_move
            .ok_or(GameError::NoLegalMove(stone))?;
        self.last_engine_result = Some(result);

        if !self.board.place(pos, stone) {
            return Err(BoardError::Occupied(pos).into());
        }
        Ok((pos, self.commit(pos, stone)))
    }

    /// Take back the last move. Returns it, or `None` if nothing was played.
    pub fn undo(&mut self) -> Option<(Pos, Stone)> {
        let (pos, stone) = self.history.pop()?;
        self.board.clear(pos);
        self.current_turn = stone;
        self.outcome = None;
        Some((pos, stone))
    }

    /// Record a stone already on the board and settle the game state
    fn commit(&mut self, pos: Pos, stone: Stone) -> MoveOutcome {
        self.history.push((pos, stone));
        info!("move {}: {} at {}", self.history.len(), stone, pos);

        if let Some(line) = winning_line(&self.board, pos, stone) {
            info!("{stone} wins with {} in a row", line.len());
            self.outcome = Some(GameOutcome::Win {
                winner: stone,
                line,
            });
            return MoveOutcome::Win(stone);
        }

        if self.board.is_full() {
            info!("board full, game drawn");
            self.outcome = Some(GameOutcome::Draw);
            return MoveOutcome::Draw;
        }

        self.current_turn = stone.opponent();
        MoveOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::config::Perspective;
    use assert_matches::assert_matches;

    fn small_game(first: Stone) -> Game {
        let config = EngineConfig {
            board_size: 9,
            ..EngineConfig::default()
        };
        Game::new(config, first).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            board_size: 4,
            ..EngineConfig::default()
        };
        assert_matches!(
            Game::new(config, Stone::Black),
            Err(ConfigError::InvalidBoardSize(4))
        );
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = small_game(Stone::White);
        assert_eq!(game.current_turn(), Stone::White);
        assert_eq!(game.play(4, 4).unwrap(), MoveOutcome::Continue);
        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(game.play(4, 5).unwrap(), MoveOutcome::Continue);
        assert_eq!(game.current_turn(), Stone::White);
        assert_eq!(
            game.history(),
            &[(Pos::new(4, 4), Stone::White), (Pos::new(4, 5), Stone::Black)]
        );
        assert_eq!(game.last_move(), Some(Pos::new(4, 5)));
    }

    #[test]
    fn test_rejected_moves_keep_turn() {
        let mut game = small_game(Stone::Black);
        game.play(4, 4).unwrap();
        let before = game.board().clone();

        assert_matches!(
            game.play(4, 4),
            Err(GameError::Board(BoardError::Occupied(_)))
        );
        assert_matches!(
            game.play(9, 0),
            Err(GameError::Board(BoardError::OutOfBounds { .. }))
        );
        assert_matches!(
            game.play(-3, 2),
            Err(GameError::Board(BoardError::OutOfBounds { .. }))
        );
        assert_eq!(game.current_turn(), Stone::White);
        assert_eq!(game.board(), &before);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_five_in_row_ends_game() {
        let mut game = small_game(Stone::Black);
        for c in 0..4 {
            assert_eq!(game.play(0, c).unwrap(), MoveOutcome::Continue);
            assert_eq!(game.play(8, c).unwrap(), MoveOutcome::Continue);
        }
        assert_eq!(game.play(0, 4).unwrap(), MoveOutcome::Win(Stone::Black));

        let expected: Vec<Pos> = (0..5).map(|c| Pos::new(0, c)).collect();
        assert_eq!(
            game.outcome(),
            Some(&GameOutcome::Win {
                winner: Stone::Black,
                line: expected
            })
        );
        assert_matches!(game.play(5, 5), Err(GameError::GameOver));
        assert_matches!(game.play_engine(), Err(GameError::GameOver));
    }

    #[test]
    fn test_undo_reopens_game() {
        let mut game = small_game(Stone::Black);
        for c in 0..4 {
            game.play(0, c).unwrap();
            game.play(8, c).unwrap();
        }
        game.play(0, 4).unwrap();
        assert!(game.is_over());

        assert_eq!(game.undo(), Some((Pos::new(0, 4), Stone::Black)));
        assert!(!game.is_over());
        assert_eq!(game.current_turn(), Stone::Black);
        assert!(game.board().is_empty(Pos::new(0, 4)));

        let mut empty = small_game(Stone::Black);
        assert_eq!(empty.undo(), None);
    }

    #[test]
    fn test_draw_on_full_board() {
        let config = EngineConfig {
            board_size: 5,
            ..EngineConfig::default()
        };
        let mut game = Game::new(config, Stone::Black).unwrap();

        // Rows alternate BBWWB / WWBBW: no line of five in any direction
        let cells = (0..5i64).flat_map(|r| (0..5i64).map(move |c| (r, c)));
        let (black, white): (Vec<_>, Vec<_>) =
            cells.partition(|&(r, c)| (c + 2 * r) % 4 < 2);
        assert_eq!((black.len(), white.len()), (13, 12));

        let mut white = white.into_iter();
        for (i, &(r, c)) in black.iter().enumerate() {
            let outcome = game.play(r, c).unwrap();
            if i == 12 {
                assert_eq!(outcome, MoveOutcome::Draw);
                break;
            }
            assert_eq!(outcome, MoveOutcome::Continue);
            let (wr, wc) = white.next().unwrap();
            assert_eq!(game.play(wr, wc).unwrap(), MoveOutcome::Continue);
        }

        assert_eq!(game.outcome(), Some(&GameOutcome::Draw));
        assert!(game.board().is_full());
        assert_matches!(game.play_engine(), Err(GameError::GameOver));
    }

    #[test]
    fn test_engine_move_is_committed() {
        let mut game = small_game(Stone::Black);
        game.play(4, 4).unwrap();

        let (pos, outcome) = game.play_engine().unwrap();
        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(game.board().get(pos), Cell::from(Stone::White));
        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(game.last_move(), Some(pos));
        assert_eq!(
            game.last_engine_result().map(|r| r.perspective),
            Some(Stone::Black)
        );
    }

    #[test]
    fn test_engine_takes_end_of_open_three() {
        // Opponent perspective: White takes the cell Black wants most
        let config = EngineConfig {
            board_size: 9,
            depth: 1,
            perspective: Perspective::Opponent,
            ..EngineConfig::default()
        };
        let mut game = Game::new(config, Stone::Black).unwrap();
        game.play(4, 2).unwrap();
        game.play(0, 0).unwrap();
        game.play(4, 3).unwrap();
        game.play(0, 8).unwrap();
        game.play(4, 4).unwrap();

        let (pos, _) = game.play_engine().unwrap();
        assert!(
            pos == Pos::new(4, 1) || pos == Pos::new(4, 5),
            "expected White to take an end of the three, got {pos}"
        );
    }
}
