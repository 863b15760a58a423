//! Frontier maintenance: the live set of exploration targets.

use std::collections::BTreeSet;

use slam_core::Cell;
use slam_env::ReachableMask;

use crate::shared_map::SharedMap;

/// Known, traversable cells with at least one unknown-but-reachable
/// 4-neighbor.
///
/// Backed by a `BTreeSet` so iteration is always in row-major `(y, x)`
/// order — the deterministic order the goal-assignment tie-break depends
/// on for reproducible runs.
#[derive(Default)]
pub struct FrontierSet(BTreeSet<Cell>);

impl FrontierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.0.iter()
    }

    pub fn contains(&self, c: &Cell) -> bool {
        self.0.contains(c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full O(W·H) rescan, per the design's "correctness over micro-
    /// optimization" call. Replaces the set's contents entirely.
    pub fn recompute(&mut self, shared: &SharedMap, reachable: &ReachableMask) {
        self.0.clear();
        for y in 0..shared.height() {
            for x in 0..shared.width() {
                let c = Cell::new(x, y);
                let obs = shared.get(c);
                let Some(tile) = obs.tile() else { continue };
                if !tile.is_traversable() {
                    continue;
                }
                let has_unknown_reachable_neighbor = c
                    .neighbors4()
                    .into_iter()
                    .any(|n| shared.get(n).is_unknown() && reachable.is_reachable(n));
                if has_unknown_reachable_neighbor {
                    self.0.insert(c);
                }
            }
        }
    }
}
