//! The coordinator's fused view of every agent's observations.

use slam_core::{Cell, Grid2D};
use slam_env::{Observation, TileKind};

/// Per-cell observation fused from every active agent's discoveries.
///
/// A cell is non-`Unknown` here iff it is non-`Unknown` in at least one
/// agent's private map; since ground truth is static there is never a
/// conflict to resolve between agents.
pub struct SharedMap(Grid2D<Observation>);

impl SharedMap {
    pub fn new(width: i32, height: i32) -> Self {
        Self(Grid2D::filled(width, height, Observation::Unknown))
    }

    #[inline]
    pub fn get(&self, c: Cell) -> Observation {
        self.0.get(c).copied().unwrap_or(Observation::Unknown)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.0.height()
    }

    /// Fold one agent's tick discoveries into the shared map. Only writes
    /// cells that are still `Unknown` here — a cell once observed by any
    /// agent never needs updating again.
    pub fn merge_observations(&mut self, discoveries: &[(Cell, TileKind)]) {
        for &(cell, tile) in discoveries {
            if self.get(cell).is_unknown() {
                self.0.set(cell, Observation::Seen(tile));
            }
        }
    }

    /// Count of non-`Unknown` cells that are also reachable — the numerator
    /// of the completion progress ratio.
    pub fn known_reachable_count(&self, reachable: &slam_env::ReachableMask) -> usize {
        self.0
            .iter()
            .filter(|(c, obs)| !obs.is_unknown() && reachable.is_reachable(*c))
            .count()
    }
}
