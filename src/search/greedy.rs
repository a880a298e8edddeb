use super::{Algorithm, SearchNode, SearchResult};
use crate::error::Result;
use crate::puzzle::{heuristic, Board};
use log::{debug, trace};
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

/// Greedy best-first search ranked on the heuristic alone.
///
/// Stale frontier entries for states already expanded are skipped when
/// popped rather than removed up front. The path found is valid but not
/// necessarily shortest.
pub fn greedy_best_first(start: &Board) -> Result<SearchResult> {
    let timer = Instant::now();
    let mut queue = BinaryHeap::new();
    let mut visited: HashSet<Board> = HashSet::new();
    let mut nodes_expanded = 0;

    debug!("greedy: starting from h={}", heuristic(start));
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
        trace!("greedy: expanding h={} depth={}", node.priority, node.cost);

        let mut path = node.path;
        path.push(node.board);

        if node.board.is_goal() {
            debug!(
                "greedy: solved in {} moves, {} nodes expanded",
                node.cost, nodes_expanded
            );
            return Ok(SearchResult {
                algorithm: Algorithm::Greedy,
                path: Some(path),
                cost: Some(node.cost),
                elapsed: timer.elapsed(),
                nodes_expanded,
            });
        }

        for next in node.board.successors()? {
            if !visited.contains(&next) {
                queue.push(SearchNode {
                    priority: heuristic(&next),
                    secondary: 0,
                    board: next,
                    cost: node.cost + 1,
                    path: path.clone(),
                });
            }
        }
    }

    debug!("greedy: frontier exhausted after {} nodes", nodes_expanded);
    Ok(SearchResult {
        algorithm: Algorithm::Greedy,
        path: None,
        cost: None,
        elapsed: timer.elapsed(),
        nodes_expanded,
    })
}
