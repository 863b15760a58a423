//! A single agent's record: position, sensing radius, activation, and the
//! private partial map it has built up from its own observations.

use slam_core::{AgentId, Cell, Grid2D, Tick};
use slam_env::Observation;

/// One exploring agent.
///
/// `active` is a one-way latch: once [`Agent::activate`] is called it never
/// reverts, matching the invariant in the data model.
pub struct Agent {
    pub id: AgentId,
    pub position: Cell,
    pub fov_radius: u32,
    pub entry_time: Tick,
    pub active: bool,
    pub private_map: Grid2D<Observation>,
    pub path_history: Vec<Cell>,
}

impl Agent {
    /// Construct an inactive agent at `start`. `private_map` is sized to the
    /// grid and entirely `Unknown` until the agent's first `sense`.
    /// `path_history` is pre-seeded with `start` so the spawn cell is always
    /// part of the record even before the agent's first move.
    pub fn new(id: AgentId, start: Cell, fov_radius: u32, entry_time: Tick, width: i32, height: i32) -> Self {
        Self {
            id,
            position: start,
            fov_radius,
            entry_time,
            active: false,
            private_map: Grid2D::filled(width, height, Observation::Unknown),
            path_history: vec![start],
        }
    }

    /// Activate the agent if `tick >= entry_time`. Returns `true` iff this
    /// call transitioned the agent from inactive to active.
    pub fn activate_if_due(&mut self, tick: Tick) -> bool {
        if !self.active && tick >= self.entry_time {
            self.active = true;
            true
        } else {
            false
        }
    }
}
