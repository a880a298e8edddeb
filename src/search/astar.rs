use super::{Algorithm, SearchNode, SearchResult};
use crate::error::Result;
use crate::puzzle::{heuristic, Board};
use log::{debug, trace};
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

/// A* search ranked on `f = g + h`, with `g` the number of moves taken.
///
/// Ties on `f` go to the entry with the lower `g`. The misplaced-tile count
/// never exceeds the moves still needed on this board, since every misplaced
/// tile has to slide at least once, so the returned cost is a shortest path.
pub fn astar(start: &Board) -> Result<SearchResult> {
    let timer = Instant::now();
    let mut queue = BinaryHeap::new();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut nodes_expanded = 0;

    debug!("astar: starting from h={}", heuristic(start));
    queue.push(SearchNode {
        priority: heuristic(start),
        secondary: 0,
        board: *start,
        cost: 0,
        path: Vec::new(),
    });

    while let Some(node) = queue.pop() {
        if !visited.insert(node.board) {
            continue;
        }
        nodes_expanded += 1;
        trace!("astar: expanding f={} g={}", node.priority, node.cost);

        let mut path = node.path;
        path.push(node.board);

        if node.board.is_goal() {
            debug!(
                "astar: solved at cost {}, {} nodes expanded",
                node.cost, nodes_expanded
            );
            return Ok(SearchResult {
                algorithm: Algorithm::AStar,
                path: Some(path),
                cost: Some(node.cost),
                elapsed: timer.elapsed(),
                nodes_expanded,
            });
        }

        let g = node.cost + 1;
        for next in node.board.successors()? {
            if !visited.contains(&next) {
                queue.push(SearchNode {
                    priority: g + heuristic(&next),
                    secondary: g,
                    board: next,
                    cost: g,
                    path: path.clone(),
                });
            }
        }
    }

    debug!("astar: frontier exhausted after {} nodes", nodes_expanded);
    Ok(SearchResult {
        algorithm: Algorithm::AStar,
        path: None,
        cost: None,
        elapsed: timer.elapsed(),
        nodes_expanded,
    })
}
