//! Agent roster construction and per-agent RNG storage.

use slam_core::{AgentId, AgentRng, Cell, Tick};
use slam_env::Environment;

use crate::agent::Agent;
use crate::error::{AgentError, AgentResult};

/// Per-agent deterministic RNGs, indexed the same way as `AgentRoster::agents`.
///
/// Kept separate from `AgentRoster` so the planner can hold `&mut AgentRngs`
/// for the agent it is currently replanning while other code holds `&`
/// references into the rest of the roster.
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32).map(|i| AgentRng::new(global_seed, AgentId(i))).collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// The full team: one record and one RNG per agent, in ascending `AgentId`
/// order — the order that defines every tie-break in the coordination layer.
pub struct AgentRoster {
    pub agents: Vec<Agent>,
    pub rngs: AgentRngs,
}

impl AgentRoster {
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    /// Positions of every currently active agent other than `exclude`.
    pub fn active_positions_excluding(&self, exclude: AgentId) -> std::collections::HashSet<Cell> {
        self.agents
            .iter()
            .filter(|a| a.active && a.id != exclude)
            .map(|a| a.position)
            .collect()
    }
}

/// Fluent builder for an [`AgentRoster`].
pub struct AgentRosterBuilder {
    seed: u64,
    specs: Vec<(Cell, u32, Tick)>,
}

impl AgentRosterBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed, specs: Vec::new() }
    }

    /// Queue one agent at `start`, with the given sensing radius and
    /// activation tick. Agents are assigned `AgentId`s in the order they are
    /// spawned here.
    pub fn spawn(mut self, start: Cell, fov_radius: u32, entry_time: Tick) -> Self {
        self.specs.push((start, fov_radius, entry_time));
        self
    }

    /// Validate every queued spawn against `env` and construct the roster.
    pub fn build(self, env: &Environment) -> AgentResult<AgentRoster> {
        if self.specs.is_empty() {
            return Err(AgentError::EmptyRoster);
        }

        let mut agents = Vec::with_capacity(self.specs.len());
        for (i, (start, fov_radius, entry_time)) in self.specs.into_iter().enumerate() {
            let id = AgentId(i as u32);
            if !env.in_bounds(start) || !env.tile(start).is_traversable() {
                return Err(AgentError::AgentOutsideGrid { id, x: start.x, y: start.y });
            }
            agents.push(Agent::new(id, start, fov_radius, entry_time, env.width(), env.height()));
        }

        let rngs = AgentRngs::new(agents.len(), self.seed);
        Ok(AgentRoster { agents, rngs })
    }
}
