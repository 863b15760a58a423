//! Single-cell movement and the sensing it triggers on arrival.

use std::collections::HashSet;

use slam_core::{Cell, Direction};
use slam_env::{Environment, TileKind};

use crate::agent::Agent;
use crate::sensor::sense;

/// Attempt to move `agent` one cell in `direction`.
///
/// Inactive agents are a no-op. A blocked target (out of range, a blocking
/// tile, or occupied by another active agent) leaves the agent in place and
/// returns no discoveries — the caller is expected to have already recorded
/// the collision (e.g. incrementing a wait counter) before calling this.
/// On a successful move, the new position is appended to `path_history` and
/// a sensing pass runs immediately.
pub fn move_agent(
    agent: &mut Agent,
    direction: Direction,
    env: &Environment,
    other_agents: &HashSet<Cell>,
) -> Vec<(Cell, TileKind)> {
    if !agent.active {
        return Vec::new();
    }

    let target = direction.apply(agent.position);
    if env.is_blocked(target, other_agents) {
        return Vec::new();
    }

    agent.position = target;
    agent.path_history.push(target);
    sense(agent, env)
}
