//! Simulation configuration: everything in §6 "Configuration recognized".

use slam_core::Tick;
use slam_plan::{PlannerMode, DEFAULT_MAX_WAIT};

/// Parameters needed to build a [`crate::Coordinator`][crate::sim::Coordinator]
/// beyond the environment itself.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Sensing radius shared by every agent; 0 means "only the agent's own cell".
    pub fov_radius: u32,
    /// One activation tick per agent, in spawn order — also fixes the agent count.
    pub entry_time_schedule: Vec<Tick>,
    /// Peer-block tolerance before an agent abandons its goal for a random walk.
    pub max_wait: u32,
    /// Which goal-assignment policy the coordinator runs each tick.
    pub planner_mode: PlannerMode,
    /// Optional tick budget; the run is reported `unsolved` if exceeded.
    pub timeout_ticks: Option<u64>,
    /// Global seed mixed into every agent's deterministic RNG.
    pub seed: u64,
    /// Real seconds one tick represents, for the clock's wall-time mapping.
    pub tick_duration_secs: u32,
}

impl SimConfig {
    /// A config with `entry_time_schedule` and `seed` supplied, and every
    /// other field at its spec-mandated or conventional default.
    pub fn new(entry_time_schedule: Vec<Tick>, seed: u64) -> Self {
        Self {
            fov_radius: 3,
            entry_time_schedule,
            max_wait: DEFAULT_MAX_WAIT,
            planner_mode: PlannerMode::Frontier,
            timeout_ticks: None,
            seed,
            tick_duration_secs: 1,
        }
    }

    /// Number of agents implied by the entry-time schedule.
    pub fn agent_count(&self) -> usize {
        self.entry_time_schedule.len()
    }
}
