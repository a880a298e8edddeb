//! Greedy best-first and A* solvers for the 8-puzzle.

pub mod cli;
pub mod compare;
pub mod error;
pub mod puzzle;
pub mod report;
pub mod search;

pub use error::{Error, Result};
pub use puzzle::{heuristic, Board, Move, GOAL};
pub use search::{astar, greedy_best_first, Algorithm, SearchResult};
