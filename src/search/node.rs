use crate::puzzle::Board;
use std::cmp::Ordering;

/// A frontier entry.
///
/// Entries pop in ascending order of `priority`, then `secondary`, then
/// `board` (row-major tile order), then `path` (lexicographic). Greedy search
/// sets `secondary` to zero; A* stores `g` there so shallower entries win ties
/// on `f`. With the order fully spelled out, equal inputs always give equal
/// results.
///
/// The full prefix path travels with each entry. That is O(depth) memory per
/// entry, which is fine for 9!/2 states but would want parent links in an
/// arena for larger puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub priority: u32,
    pub secondary: u32,
    pub board: Board,
    /// Moves taken from the start to reach `board`.
    pub cost: u32,
    /// States from the start up to, but not including, `board`.
    pub path: Vec<Board>,
}

impl SearchNode {
    fn key(&self) -> (u32, u32, &Board, &[Board]) {
        (self.priority, self.secondary, &self.board, &self.path)
    }
}

// Reversed so `BinaryHeap` behaves as a min-heap.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
