//! One-shot computation of the set of cells the team could ever observe.

use std::collections::VecDeque;

use slam_core::{Cell, Grid2D};

use crate::grid::Environment;

/// Boolean mask over the grid: `true` where a cell is reachable — either
/// directly walkable from an entry point, or a blocking cell adjacent to a
/// walkable cell (and therefore observable from it).
pub struct ReachableMask(Grid2D<bool>);

impl ReachableMask {
    #[inline]
    pub fn is_reachable(&self, c: Cell) -> bool {
        self.0.get(c).copied().unwrap_or(false)
    }

    /// Total number of reachable cells — the denominator of the completion
    /// progress ratio.
    pub fn total_reachable(&self) -> usize {
        self.0.iter().filter(|(_, &r)| r).count()
    }
}

/// Two-phase BFS: first the walkable interior, then the blocking cells that
/// border it.
pub fn compute_reachable_mask(env: &Environment) -> ReachableMask {
    let width = env.width();
    let height = env.height();
    let mut walkable_reachable = Grid2D::filled(width, height, false);

    let mut queue: VecDeque<Cell> = VecDeque::new();
    for &start in env.entry_points() {
        if !walkable_reachable.get(start).copied().unwrap_or(false) {
            walkable_reachable.set(start, true);
            queue.push_back(start);
        }
    }

    while let Some(cur) = queue.pop_front() {
        for n in cur.neighbors4() {
            if walkable_reachable.get(n).copied().unwrap_or(true) {
                continue;
            }
            if env.tile(n).is_traversable() {
                walkable_reachable.set(n, true);
                queue.push_back(n);
            }
        }
    }

    let mut final_reachable = walkable_reachable.clone();
    for y in 0..height {
        for x in 0..width {
            let c = Cell::new(x, y);
            if *walkable_reachable.get(c).unwrap() {
                continue;
            }
            if !env.tile(c).is_blocking() {
                continue;
            }
            let adjacent_walkable = c
                .neighbors4()
                .into_iter()
                .any(|n| walkable_reachable.get(n).copied().unwrap_or(false));
            if adjacent_walkable {
                final_reachable.set(c, true);
            }
        }
    }

    ReachableMask(final_reachable)
}
