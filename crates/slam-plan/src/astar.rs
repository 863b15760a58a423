//! Grid A* over the shared partial map, with optimistic traversal through
//! cells that have not been observed yet.
//!
//! # Cost model
//!
//! 4-connected, uniform edge cost 1, Manhattan-distance heuristic — which is
//! admissible and consistent on a 4-connected unit-cost grid, so the search
//! is optimal.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use slam_core::Cell;
use slam_env::Environment;
use slam_map::SharedMap;

/// A cell is passable to the planner if it has not been observed yet
/// (optimistic — the agent may discover it's blocked on arrival and
/// replan) or if it has been observed and is traversable.
fn passable(env: &Environment, shared: &SharedMap, c: Cell) -> bool {
    if !env.in_bounds(c) {
        return false;
    }
    match shared.get(c).tile() {
        None => true,
        Some(tile) => tile.is_traversable(),
    }
}

/// Find a shortest 4-connected path from `start` to `goal`.
///
/// Returns `None` if no path exists given the current partial knowledge.
/// The returned path excludes `start` and includes `goal`.
pub fn find_path(env: &Environment, shared: &SharedMap, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    if start == goal {
        return Some(Vec::new());
    }

    let mut g_score: HashMap<Cell, u32> = HashMap::new();
    let mut prev: HashMap<Cell, Cell> = HashMap::new();
    g_score.insert(start, 0);

    let mut open: BinaryHeap<Reverse<(u32, Cell)>> = BinaryHeap::new();
    open.push(Reverse((start.manhattan_distance(goal), start)));

    while let Some(Reverse((f, current))) = open.pop() {
        let current_g = g_score[&current];

        // Skip stale heap entries left behind by an earlier, since-improved
        // push for this cell.
        if f > current_g + current.manhattan_distance(goal) {
            continue;
        }

        if current == goal {
            return Some(reconstruct(&prev, goal));
        }

        for next in current.neighbors4() {
            if !passable(env, shared, next) {
                continue;
            }
            let tentative_g = current_g + 1;
            if tentative_g < *g_score.get(&next).unwrap_or(&u32::MAX) {
                g_score.insert(next, tentative_g);
                prev.insert(next, current);
                let f = tentative_g + next.manhattan_distance(goal);
                open.push(Reverse((f, next)));
            }
        }
    }

    None
}

fn reconstruct(prev: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&p) = prev.get(&cur) {
        path.push(p);
        cur = p;
    }
    path.reverse();
    // `path[0]` is `start` itself; drop it so the result excludes the start
    // cell, per the reconstruction contract.
    path.remove(0);
    path
}
