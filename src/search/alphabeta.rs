//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Gomoku AI.
//!
//! # Features
//!
//! - Fixed-perspective leaves: every leaf is scored for the same player,
//!   whichever side moved last. Maximizing nodes place that player's
//!   stone, minimizing nodes place the opponent's.
//! - Brute-force candidates: every empty cell, in row-major order, at
//!   every level. No move ordering, no proximity filter.
//! - Two cutoff policies: row-local (stop scanning the current row only)
//!   and full (abandon the node).
//! - Optional parallel root split with one private board per first move.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::eval::ScoreTable;
//! use gomoku::search::{CutoffPolicy, Searcher};
//!
//! let mut board = Board::with_size(9);
//! board.place(Pos::new(4, 4), Stone::White);
//!
//! let mut searcher = Searcher::new(Stone::Black, CutoffPolicy::RowLocal, ScoreTable::default());
//! let result = searcher.search_root(&mut board, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, ScoreTable};

/// Infinity score for alpha-beta bounds
pub const INF: f64 = f64::INFINITY;

/// What a node does once `beta <= alpha`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoffPolicy {
    /// Stop scanning the current row; later rows are still searched
    #[default]
    RowLocal,
    /// Stop searching the node
    Full,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Times a node hit `beta <= alpha`
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining worker stats)
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found; `None` at depth 0 or on a full board
    pub best_move: Option<Pos>,
    /// Score of the best move, from the searcher's perspective
    pub score: f64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher.
///
/// Borrows the board mutably for the duration of one call. Every stone
/// placed while exploring is taken back before the call returns.
#[derive(Debug, Clone)]
pub struct Searcher {
    perspective: Stone,
    cutoff: CutoffPolicy,
    table: ScoreTable,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that scores leaves for `perspective`.
    #[must_use]
    pub fn new(perspective: Stone, cutoff: CutoffPolicy, table: ScoreTable) -> Self {
        Self {
            perspective,
            cutoff,
            table,
            stats: SearchStats::default(),
        }
    }

    /// Change the player every leaf is scored for
    pub fn set_perspective(&mut self, perspective: Stone) {
        self.perspective = perspective;
    }

    /// Search `depth` plies with the given window.
    ///
    /// `maximizing` selects whose stone is placed first: the perspective
    /// player's when true, the opponent's otherwise.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        alpha: f64,
        beta: f64,
        maximizing: bool,
    ) -> SearchResult {
        self.stats = SearchStats::default();
        let (best_move, score) = self.minimax(board, depth, alpha, beta, maximizing);

        debug!(
            "search depth={} perspective={} best={:?} score={:.1} nodes={} cutoffs={}",
            depth, self.perspective, best_move, score, self.stats.nodes, self.stats.cutoffs
        );

        SearchResult {
            best_move,
            score,
            stats: self.stats,
        }
    }

    /// Full-window search with the perspective player to move
    pub fn search_root(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.search(board, depth, -INF, INF, true)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (Option<Pos>, f64) {
        self.stats.nodes += 1;

        // No legal move left counts as a leaf
        if depth == 0 || board.is_full() {
            self.stats.leaves += 1;
            return (None, evaluate(board, self.perspective, &self.table));
        }

        let mover = if maximizing {
            self.perspective
        } else {
            self.perspective.opponent()
        };
        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };
        let size = board.size();

        'rows: for r in 0..size {
            for c in 0..size {
                #[allow(clippy::cast_possible_truncation)]
                let pos = Pos::new(r as u8, c as u8);

                let score = {
                    let Some(mut placed) = board.hypothetical(pos, mover) else {
                        continue;
                    };
                    self.minimax(&mut placed, depth - 1, alpha, beta, !maximizing).1
                };

                if maximizing {
                    if score > best_score {
                        best_score = score;
                        best_move = Some(pos);
                    }
                    alpha = alpha.max(score);
                } else {
                    if score < best_score {
                        best_score = score;
                        best_move = Some(pos);
                    }
                    beta = beta.min(score);
                }

                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    match self.cutoff {
                        CutoffPolicy::RowLocal => break,
                        CutoffPolicy::Full => break 'rows,
                    }
                }
            }
        }

        (best_move, best_score)
    }

    /// Root search split across the rayon pool.
    ///
    /// Each first move is searched on its own copy of the board with a full
    /// window. The root keeps the first move in row-major order that
    /// reaches the best score, like the sequential search does.
    #[must_use]
    pub fn search_parallel(&self, board: &Board, depth: u8) -> SearchResult {
        if depth == 0 || board.is_full() {
            let mut worker = self.clone();
            return worker.search_root(&mut board.clone(), depth);
        }

        let candidates: Vec<Pos> = board.empty_cells().collect();
        let perspective = self.perspective;

        let scored: Vec<(Pos, f64, SearchStats)> = candidates
            .par_iter()
            .map(|&pos| {
                let mut local = board.clone();
                local.place(pos, perspective);
                let mut worker = Searcher::new(perspective, self.cutoff, self.table.clone());
                let (_, score) = worker.minimax(&mut local, depth - 1, -INF, INF, false);
                trace!("root move {} scored {:.1}", pos, score);
                (pos, score, worker.stats)
            })
            .collect();

        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let mut best_move = None;
        let mut best_score = -INF;
        for (pos, score, worker_stats) in scored {
            stats.merge(&worker_stats);
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        debug!(
            "parallel search depth={} perspective={} best={:?} score={:.1} nodes={}",
            depth, perspective, best_move, best_score, stats.nodes
        );

        SearchResult {
            best_move,
            score: best_score,
            stats,
        }
    }
}
