//! Board structure with place/undo primitives

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{in_bounds, BoardError, Cell, Pos, Stone, BOARD_SIZE};

/// Game board: one bitboard per color on an N x N grid.
///
/// Two boards compare equal iff they have the same size and every cell
/// holds the same state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty standard 19x19 board
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Create an empty board of side `size`.
    ///
    /// Callers taking sizes from user input should go through
    /// `EngineConfig::validate` first.
    pub fn with_size(size: usize) -> Self {
        debug_assert!(size > 0 && size <= super::MAX_BOARD_SIZE);
        Self {
            size,
            black: Bitboard::new(size * size),
            white: Bitboard::new(size * size),
        }
    }

    /// Build a board from text rows, one string per row.
    ///
    /// `X`/`x` is Black, `O`/`o` is White, `.` or `+` is empty and spaces
    /// are ignored. The board side is the number of rows; every row must
    /// hold exactly that many cells.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 || size > super::MAX_BOARD_SIZE {
            return Err(BoardError::InvalidLayout(format!(
                "expected 1..={} rows, got {size}",
                super::MAX_BOARD_SIZE
            )));
        }

        let mut board = Self::with_size(size);
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(BoardError::InvalidLayout(format!(
                    "row {r} has {} cells, expected {size}",
                    cells.len()
                )));
            }
            for (c, ch) in cells.into_iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'X' | 'x' => {
                        board.place(pos, Stone::Black);
                    }
                    'O' | 'o' => {
                        board.place(pos, Stone::White);
                    }
                    '.' | '+' => {}
                    other => {
                        return Err(BoardError::InvalidLayout(format!(
                            "unexpected '{other}' at ({r}, {c})"
                        )));
                    }
                }
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, `(N/2, N/2)` with integer division
    #[inline]
    pub fn center(&self) -> Pos {
        #[allow(clippy::cast_possible_truncation)]
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    fn pos_at(&self, idx: usize) -> Pos {
        #[allow(clippy::cast_possible_truncation)]
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    /// Check signed coordinates against this board
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        in_bounds(row, col, self.size)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Cell state at `(row, col)`, or `None` outside the board
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            #[allow(clippy::cast_possible_truncation)]
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    /// Get cell at an in-bounds position. Public reads go through `at`.
    #[inline]
    pub(crate) fn get(&self, pos: Pos) -> Cell {
        debug_assert!(self.contains(pos));
        let idx = self.index(pos);
        if self.black.get(idx) {
            Cell::Black
        } else if self.white.get(idx) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if an in-bounds position is empty
    #[inline]
    pub(crate) fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a stone if the cell is on the board and empty.
    ///
    /// Returns `false` without touching the board otherwise.
    #[inline]
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        if !self.contains(pos) || !self.is_empty(pos) {
            return false;
        }
        let idx = self.index(pos);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
        }
        true
    }

    /// Place a stone from raw coordinates, reporting why it failed
    pub fn try_place(&mut self, row: i64, col: i64, stone: Stone) -> Result<Pos, BoardError> {
        let size = self.size;
        let out_of_bounds = || BoardError::OutOfBounds { row, col, size };
        let r = u8::try_from(row).map_err(|_| out_of_bounds())?;
        let c = u8::try_from(col).map_err(|_| out_of_bounds())?;
        let pos = Pos::new(r, c);
        if !self.contains(pos) {
            return Err(out_of_bounds());
        }
        if !self.place(pos, stone) {
            return Err(BoardError::Occupied(pos));
        }
        Ok(pos)
    }

    /// Force a cell back to empty. Returns `false` for a cell off the board.
    #[inline]
    pub fn clear(&mut self, pos: Pos) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
        true
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The cell is cleared when the guard drops, on every exit path.
    /// Returns `None` if the cell cannot take the stone.
    pub fn hypothetical(&mut self, pos: Pos, stone: Stone) -> Option<Hypothetical<'_>> {
        if self.place(pos, stone) {
            Some(Hypothetical { board: self, pos })
        } else {
            None
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Occupied cells with their stones, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.black.iter_union(&self.white).map(move |idx| {
            let stone = if self.black.get(idx) {
                Stone::Black
            } else {
                Stone::White
            };
            (self.pos_at(idx), stone)
        })
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size * self.size)
            .filter(move |&idx| !self.black.get(idx) && !self.white.get(idx))
            .map(move |idx| self.pos_at(idx))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:>3}")?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{r:>3}")?;
            for c in 0..self.size {
                #[allow(clippy::cast_possible_truncation)]
                let cell = self.get(Pos::new(r as u8, c as u8));
                write!(f, "{:>3}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A stone placed for exploration; dropping the guard takes it back.
pub struct Hypothetical<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Hypothetical<'_> {
    /// The cell this guard occupies
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}
