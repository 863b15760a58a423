//! Fluent builder for constructing a [`Coordinator`].

use slam_agent::AgentRosterBuilder;
use slam_core::SimClock;
use slam_env::{compute_reachable_mask, Environment};
use slam_map::{FrontierSet, SharedMap};
use slam_plan::{GoalTable, PathTable, WaitCounters};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::sim::Coordinator;

/// Builds a [`Coordinator`] from a finished [`Environment`] and a
/// [`SimConfig`].
///
/// Agent start positions are assigned by cycling through
/// `env.entry_points()` in order — one agent per entry in
/// `config.entry_time_schedule`, wrapping around if there are more agents
/// than entry points.
pub struct SimBuilder {
    config: SimConfig,
    env: Environment,
}

impl SimBuilder {
    pub fn new(config: SimConfig, env: Environment) -> Self {
        Self { config, env }
    }

    pub fn build(self) -> SimResult<Coordinator> {
        let agent_count = self.config.agent_count();
        if agent_count == 0 {
            return Err(SimError::Config("entry_time_schedule must not be empty".into()));
        }

        let entry_points = self.env.entry_points();
        let mut roster_builder = AgentRosterBuilder::new(self.config.seed);
        for (i, &entry_time) in self.config.entry_time_schedule.iter().enumerate() {
            let start = entry_points[i % entry_points.len()];
            roster_builder = roster_builder.spawn(start, self.config.fov_radius, entry_time);
        }
        let roster = roster_builder.build(&self.env)?;

        let reachable = compute_reachable_mask(&self.env);
        let shared = SharedMap::new(self.env.width(), self.env.height());

        log::info!(
            "coordinator built: {} agents, {}x{} grid, {} reachable cells",
            agent_count,
            self.env.width(),
            self.env.height(),
            reachable.total_reachable()
        );

        Ok(Coordinator {
            clock: SimClock::new(0, self.config.tick_duration_secs),
            config: self.config,
            env: self.env,
            roster,
            shared,
            reachable,
            frontier: FrontierSet::new(),
            goals: GoalTable::new(),
            paths: PathTable::new(),
            waits: WaitCounters::new(),
        })
    }
}
