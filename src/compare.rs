//! Runs several algorithms over a list of start states.

use crate::error::Result;
use crate::puzzle::Board;
use crate::search::{Algorithm, SearchResult};
use log::info;
use serde::{Deserialize, Serialize};

/// Start states used when none are supplied.
pub const DEFAULT_CASES: [[[u8; 3]; 3]; 3] = [
    [[1, 2, 3], [4, 0, 6], [7, 5, 8]],
    [[1, 2, 3], [0, 4, 6], [7, 5, 8]],
    [[7, 2, 4], [5, 0, 6], [8, 3, 1]],
];

pub fn default_cases() -> Result<Vec<Board>> {
    DEFAULT_CASES.iter().map(|&tiles| Board::new(tiles)).collect()
}

/// One start state and a result per algorithm, in the order requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: usize,
    pub start: Board,
    pub results: Vec<SearchResult>,
}

impl CaseReport {
    pub fn result(&self, algorithm: Algorithm) -> Option<&SearchResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
}

/// Solves every start with every algorithm. Each search gets its own
/// frontier and visited set.
pub fn compare(starts: &[Board], algorithms: &[Algorithm]) -> Result<Vec<CaseReport>> {
    starts
        .iter()
        .enumerate()
        .map(|(idx, start)| {
            info!("test case {}: {} algorithm(s)", idx + 1, algorithms.len());
            let results = algorithms
                .iter()
                .map(|algorithm| algorithm.run(start))
                .collect::<Result<Vec<_>>>()?;
            Ok(CaseReport {
                case: idx + 1,
                start: *start,
                results,
            })
        })
        .collect()
}
