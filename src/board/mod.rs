//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


use std::fmt;

use thiserror::Error;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Hypothetical};

/// Default board size (19x19)
pub const BOARD_SIZE: usize = 19;

/// Smallest board a game can be played on (room for five in a row)
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board; coordinates are stored as `u8`
pub const MAX_BOARD_SIZE: usize = 64;

/// Direction vectors for line checking, as (row delta, col delta).
/// Each axis is listed once; scanners walk both senses from a cell.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stone colors. Black is the reference side the search evaluates from
/// by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => f.write_str("Black"),
            Stone::White => f.write_str("White"),
        }
    }
}

/// Occupancy of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Stone on this cell, if any
    #[inline]
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Stone::Black),
            Cell::White => Some(Stone::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Text symbol used by `Board`'s `Display` and `Board::from_rows`
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

impl From<Stone> for Cell {
    #[inline]
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

impl PartialEq<Stone> for Cell {
    #[inline]
    fn eq(&self, other: &Stone) -> bool {
        *self == Cell::from(*other)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `(dr, dc)`, or `None` when leaving a board
    /// of side `size`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr * steps;
        let c = i32::from(self.col) + dc * steps;
        if in_bounds(r, c, size) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major order, the order the search enumerates candidates in
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Check signed coordinates against a board of side `size`
#[inline]
pub fn in_bounds(row: i32, col: i32, size: usize) -> bool {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let size = size as i32;
    row >= 0 && row < size && col >= 0 && col < size
}

/// Errors from board mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}
