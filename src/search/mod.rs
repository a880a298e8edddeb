//! Informed searches over the 8-puzzle state space.
//!
//! Each call owns its frontier and visited set; nothing is shared between
//! runs, so separate cases can be solved independently.

mod astar;
mod greedy;
mod node;

pub use astar::astar;
pub use greedy::greedy_best_first;

use node::SearchNode;

use crate::error::{Error, Result};
use crate::puzzle::{Board, Move};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Greedy,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Greedy, Algorithm::AStar];

    pub fn run(&self, start: &Board) -> Result<SearchResult> {
        match self {
            Algorithm::Greedy => greedy_best_first(start),
            Algorithm::AStar => astar(start),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Algorithm::Greedy => "Greedy Best-First Search",
            Algorithm::AStar => "A* Search",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one search run.
///
/// `path` and `cost` are `None` when the frontier ran dry before the goal was
/// reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path: Option<Vec<Board>>,
    pub cost: Option<u32>,
    #[serde(with = "seconds")]
    pub elapsed: Duration,
    pub nodes_expanded: usize,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves in the returned path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// The returned path as a move list.
    pub fn moves(&self) -> Option<Vec<Move>> {
        let path = self.path.as_ref()?;
        path.windows(2).map(|pair| pair[0].move_to(&pair[1])).collect()
    }
}

/// Checks that `path` starts at `start`, ends at the goal and that each step
/// is a single legal slide.
pub fn validate_path(start: &Board, path: &[Board]) -> Result<()> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(Error::InvalidPath {
                message: "path is empty".to_string(),
            })
        }
    };

    if first != start {
        return Err(Error::InvalidPath {
            message: format!("path starts at\n{}not at\n{}", first, start),
        });
    }
    if !last.is_goal() {
        return Err(Error::InvalidPath {
            message: format!("path ends at\n{}", last),
        });
    }

    for (i, pair) in path.windows(2).enumerate() {
        if pair[0].move_to(&pair[1]).is_none() {
            return Err(Error::InvalidPath {
                message: format!("step {} is not a single slide", i + 1),
            });
        }
    }

    Ok(())
}

mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
