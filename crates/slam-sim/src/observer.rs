//! Simulation observer trait for progress reporting and data collection.

use slam_agent::AgentRoster;
use slam_core::{AgentId, Tick};
use slam_map::{FrontierSet, SharedMap};

/// Non-fatal conditions the coordinator recovers from locally but still
/// reports, per §7's "emits structured warnings... but never aborts".
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SimWarning {
    /// A* found no path to any candidate frontier goal; the agent fell back
    /// to a random walk this tick.
    PlanningDeadend { agent: AgentId, tick: Tick },
    /// An agent's wait counter reached `max_wait`; it dropped its goal and
    /// fell back to a random walk.
    PeerStandoff { agent: AgentId, tick: Tick },
    /// The configured tick budget was exceeded before progress reached 1.0.
    Timeout { tick: Tick, progress: f64 },
}

/// Callbacks invoked by [`crate::Coordinator::run`] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick. `woken` is the number of agents
    /// activated or otherwise acted on this tick.
    fn on_tick_end(&mut self, _tick: Tick, _woken: usize) {}

    /// Called once per tick after the apply phase, with read-only access to
    /// the fused state an output writer would want to record.
    fn on_snapshot(
        &mut self,
        _tick: Tick,
        _shared: &SharedMap,
        _roster: &AgentRoster,
        _frontier: &FrontierSet,
        _progress_ratio: f64,
    ) {
    }

    /// Called whenever the coordinator recovers from a non-fatal planning or
    /// execution condition (§7).
    fn on_warning(&mut self, _warning: &SimWarning) {}

    /// Called once after the run ends, successfully or via timeout.
    fn on_sim_end(&mut self, _final_tick: Tick, _completed: bool) {}
}

/// A [`SimObserver`] that does nothing. Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
