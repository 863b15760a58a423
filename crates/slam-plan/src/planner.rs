//! Goal assignment and path execution, dispatched on a tagged mode rather
//! than a trait object — the coordinator has exactly two planning
//! strategies and no application ever plugs in a third.

use std::collections::{HashSet, VecDeque};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use slam_core::{AgentId, AgentRng, Cell, Direction};
use slam_env::Environment;
use slam_map::{FrontierSet, SharedMap};

use crate::astar::find_path;
use crate::tables::{GoalTable, PathTable, WaitCounters};

/// Which policy the coordinator uses to move each agent this run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PlannerMode {
    /// Every active agent performs an unweighted random walk every tick.
    Random,
    /// Full frontier goal-assignment and A* path execution (§4.6).
    Frontier,
}

/// A non-fatal event the planner recovered from locally this call, for the
/// coordinator to surface through its observer (§7).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PlanEvent {
    /// Nothing noteworthy happened.
    None,
    /// No candidate frontier goal yielded an A* path; fell back to a random walk.
    PlanningDeadend,
    /// The wait counter reached `max_wait`; dropped the goal for a random walk.
    PeerStandoff,
}

/// Everything the planner needs to read but never mutates directly.
pub struct PlanningView<'a> {
    pub env: &'a Environment,
    pub shared: &'a SharedMap,
    pub frontier: &'a FrontierSet,
    /// Current positions of every other active agent (self excluded) — used
    /// for the movement-feasibility check and the peer-block wait.
    pub other_positions: &'a HashSet<Cell>,
    /// Current positions of every other active agent, for the spread
    /// tie-break. May overlap `other_positions`; kept separate because the
    /// tie-break wants a slice to sum over, not a set to query.
    pub peer_positions: &'a [Cell],
}

/// Decide and return this tick's movement for one active agent, mutating
/// the shared goal/path/wait-counter tables and `assigned_goals` (the
/// intra-tick set of frontier cells already claimed by an earlier agent this
/// tick) as a side effect.
#[allow(clippy::too_many_arguments)]
pub fn plan_move(
    mode: PlannerMode,
    agent_id: AgentId,
    position: Cell,
    view: &PlanningView,
    goals: &mut GoalTable,
    paths: &mut PathTable,
    waits: &mut WaitCounters,
    assigned_goals: &mut HashSet<Cell>,
    max_wait: u32,
    rng: &mut AgentRng,
) -> (Direction, PlanEvent) {
    match mode {
        PlannerMode::Random => (random_walk(position, view.env, view.other_positions, rng), PlanEvent::None),
        PlannerMode::Frontier => {
            frontier_plan(agent_id, position, view, goals, paths, waits, assigned_goals, max_wait, rng)
        }
    }
}

fn frontier_plan(
    agent_id: AgentId,
    position: Cell,
    view: &PlanningView,
    goals: &mut GoalTable,
    paths: &mut PathTable,
    waits: &mut WaitCounters,
    assigned_goals: &mut HashSet<Cell>,
    max_wait: u32,
    rng: &mut AgentRng,
) -> (Direction, PlanEvent) {
    let needs_reassignment = match goals.get(agent_id) {
        None => true,
        Some(goal) => !view.shared.get(goal).is_unknown() || paths.is_empty(agent_id),
    };

    if needs_reassignment {
        match select_goal(position, view, assigned_goals) {
            Some((goal, path)) => {
                assigned_goals.insert(goal);
                goals.set(agent_id, goal);
                paths.set(agent_id, path);
            }
            None => {
                goals.clear(agent_id);
                paths.clear(agent_id);
                let dir = random_walk(position, view.env, view.other_positions, rng);
                return (dir, PlanEvent::PlanningDeadend);
            }
        }
    }

    let next = paths.front(agent_id).expect("a reassigned or still-valid goal always has a non-empty path");

    if view.other_positions.contains(&next) {
        let waited = waits.increment(agent_id);
        if waited >= max_wait {
            goals.clear(agent_id);
            paths.clear(agent_id);
            waits.reset(agent_id);
            let dir = random_walk(position, view.env, view.other_positions, rng);
            return (dir, PlanEvent::PeerStandoff);
        }
        return (Direction::Stay, PlanEvent::None);
    }

    waits.reset(agent_id);
    paths.advance(agent_id);
    (Direction::between(position, next).unwrap_or(Direction::Stay), PlanEvent::None)
}

/// Rank every unclaimed frontier cell by (nearest first, most-spread-from-
/// peers as tie-break), then try each in order until one has a path.
fn select_goal(
    position: Cell,
    view: &PlanningView,
    assigned_goals: &HashSet<Cell>,
) -> Option<(Cell, VecDeque<Cell>)> {
    let mut candidates: Vec<Cell> =
        view.frontier.iter().copied().filter(|c| *c != position && !assigned_goals.contains(c)).collect();

    candidates.sort_by(|&a, &b| {
        let dist_a = position.manhattan_distance(a);
        let dist_b = position.manhattan_distance(b);
        dist_a.cmp(&dist_b).then_with(|| {
            let spread_a: f64 = view.peer_positions.iter().map(|&p| a.euclidean_distance(p)).sum();
            let spread_b: f64 = view.peer_positions.iter().map(|&p| b.euclidean_distance(p)).sum();
            spread_b.partial_cmp(&spread_a).unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    #[cfg(feature = "parallel")]
    {
        candidates
            .par_iter()
            .map(|&c| (c, find_path(view.env, view.shared, position, c)))
            .collect::<Vec<_>>()
            .into_iter()
            .find_map(|(c, path)| path.map(|p| (c, p.into_iter().collect())))
    }
    #[cfg(not(feature = "parallel"))]
    {
        candidates.into_iter().find_map(|c| find_path(view.env, view.shared, position, c).map(|p| (c, p.into_iter().collect())))
    }
}

/// Shuffle the five directions and issue the first whose target is not
/// blocked. `Stay` is always eligible, so this never fails to return.
fn random_walk(position: Cell, env: &Environment, other_positions: &HashSet<Cell>, rng: &mut AgentRng) -> Direction {
    let mut dirs = Direction::ALL;
    rng.shuffle(&mut dirs);
    for dir in dirs {
        let target = dir.apply(position);
        if !env.is_blocked(target, other_positions) {
            return dir;
        }
    }
    Direction::Stay
}
