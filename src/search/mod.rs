//! Search module for Gomoku AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning,
//! plus a parallel variant that splits the root moves across threads.

pub mod alphabeta;

pub use alphabeta::{CutoffPolicy, SearchResult, SearchStats, Searcher, INF};
